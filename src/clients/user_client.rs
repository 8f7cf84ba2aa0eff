use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::auth::CredentialValidator;
use crate::domain::{User, UserCreate};
use crate::user_actor::UserError;

/// Client for interacting with the User Table actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    /// Registers a user. The returned record carries the new secret code;
    /// this is the only response that reveals it unprompted.
    #[instrument(skip(self, params), fields(user_email = %params.email_address))]
    pub async fn register(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        let user = self.inner.create(params).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Finds the user owning `secret_code`.
    pub async fn lookup(&self, secret_code: &str) -> Result<User, UserError> {
        self.get_user(secret_code.to_string())
            .await?
            .ok_or(UserError::NotFound)
    }
}

#[async_trait]
impl CredentialValidator for UserClient {
    async fn validate(&self, secret_code: &str) -> Result<User, UserError> {
        self.lookup(secret_code).await
    }
}
