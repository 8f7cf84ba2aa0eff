//! Caller authentication and admin authorization seams.

use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::domain::User;
use crate::user_actor::UserError;

/// Turns a presented secret code into the user it belongs to.
///
/// The stock implementation treats the secret as a plain bearer token that is
/// also the User Table key (see `UserClient`).
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    async fn validate(&self, secret_code: &str) -> Result<User, UserError>;
}

/// Decides whether a request may use the admin routes.
pub trait AdminPolicy: Send + Sync {
    fn is_admin(&self, headers: &HeaderMap) -> bool;
}

/// Grants admin access to every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAdmin;

impl AdminPolicy for AlwaysAdmin {
    fn is_admin(&self, _headers: &HeaderMap) -> bool {
        true
    }
}
