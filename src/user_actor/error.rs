use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found")]
    NotFound,
    #[error("Email address is already registered")]
    DuplicateEmail,
    #[error("{0}")]
    InvalidInput(String),
    #[error("User table unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(_) => UserError::NotFound,
            other => UserError::Unavailable(other.to_string()),
        }
    }
}
