use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::complaint_actor::ComplaintError;
use crate::user_actor::UserError;

/// Request-level failures. Each maps to one status code and a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    MalformedBody,
    #[error("{0}")]
    MissingField(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            // Log the internal details but don't expose them to the client
            ApiError::Internal(detail) => tracing::error!(%detail, "Request failed"),
            other => tracing::debug!(status = status.as_u16(), error = %other, "Request rejected"),
        }
        (status, self.to_string()).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound => ApiError::NotFound(e.to_string()),
            UserError::DuplicateEmail => ApiError::Conflict(e.to_string()),
            UserError::InvalidInput(msg) => ApiError::MissingField(msg),
            UserError::Unavailable(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ComplaintError> for ApiError {
    fn from(e: ComplaintError) -> Self {
        match e {
            ComplaintError::NotFound => ApiError::NotFound(e.to_string()),
            ComplaintError::Forbidden => ApiError::Forbidden(e.to_string()),
            ComplaintError::AlreadyResolved => ApiError::Conflict(e.to_string()),
            ComplaintError::InvalidInput(msg) => ApiError::MissingField(msg),
            ComplaintError::Unavailable(msg) => ApiError::Internal(msg),
        }
    }
}
