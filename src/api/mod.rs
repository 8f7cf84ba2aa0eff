//! HTTP surface: routes, request DTOs, and error mapping.

mod dto;
mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::{AdminPolicy, CredentialValidator};
use crate::clients::{ComplaintClient, UserClient};

pub use dto::*;
pub use error::*;

/// Shared handler state. Cloned per request; every field is a handle.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub complaints: ComplaintClient,
    pub credentials: Arc<dyn CredentialValidator>,
    pub admin: Arc<dyn AdminPolicy>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(handlers::hello))
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register))
        .route("/submitComplaint", post(handlers::submit_complaint))
        .route("/getAllComplaintsForUser", post(handlers::complaints_for_user))
        .route(
            "/getAllComplaintsForAdmin",
            get(handlers::complaints_for_admin).post(handlers::complaints_for_admin),
        )
        .route("/viewComplaint", post(handlers::view_complaint))
        .route("/resolveComplaint", post(handlers::resolve_complaint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
