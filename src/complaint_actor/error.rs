use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during complaint operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComplaintError {
    #[error("Complaint not found")]
    NotFound,
    #[error("Unauthorized to access this complaint")]
    Forbidden,
    #[error("Complaint is already resolved")]
    AlreadyResolved,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Complaint table unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for ComplaintError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(_) => ComplaintError::NotFound,
            other => ComplaintError::Unavailable(other.to_string()),
        }
    }
}
