use serde::{Deserialize, Serialize};

use crate::domain::Complaint;
use crate::ids;

/// Represents a registered user in the system.
///
/// `secret_code` is both the User Table key and the caller's bearer
/// credential. It is only revealed in the registration response and on login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub secret_code: String,
    pub name: String,
    pub email_address: String,
    #[serde(default)]
    pub complaints: Vec<Complaint>,
}

/// Payload for registering a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email_address: String,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email_address: email_address.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email_address.is_empty()
    }
}

impl User {
    /// Creates a new User under the given secret code.
    ///
    /// # Notes
    /// A fresh `id` is stamped here. The complaint list starts empty.
    pub fn new(secret_code: impl Into<String>, params: UserCreate) -> Self {
        Self {
            id: ids::generate_id(),
            secret_code: secret_code.into(),
            name: params.name,
            email_address: params.email_address,
            complaints: Vec::new(),
        }
    }
}
