use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use crate::domain::{Complaint, ComplaintCreate, User};
use super::{ApiError, AppState, ComplaintAccessReq, RegisterReq, SecretCodeReq, SubmitComplaintReq};

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody)
}

fn require<'a>(value: &'a str, message: &str) -> Result<&'a str, ApiError> {
    if value.is_empty() {
        Err(ApiError::MissingField(message.to_string()))
    } else {
        Ok(value)
    }
}

pub async fn hello() -> &'static str {
    "Hello, World!"
}

/// Returns the caller's user record with their current complaints attached.
#[instrument(skip_all)]
pub async fn login(State(state): State<AppState>, body: Bytes) -> Result<Json<User>, ApiError> {
    let req: SecretCodeReq = parse_body(&body)?;
    let secret = require(&req.secret_code, "Secret Code is required")?;

    let mut user = state.credentials.validate(secret).await?;
    user.complaints = state.complaints.list_for_owner(secret).await?;
    info!(user_id = %user.id, "User logged in");
    Ok(Json(user))
}

#[instrument(skip_all)]
pub async fn register(State(state): State<AppState>, body: Bytes) -> Result<Json<User>, ApiError> {
    let req: RegisterReq = parse_body(&body)?;
    let user = state.users.register(req.into()).await?;
    Ok(Json(user))
}

/// Stores a complaint for a registered owner. Unknown owners get 404.
#[instrument(skip_all)]
pub async fn submit_complaint(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req: SubmitComplaintReq = parse_body(&body)?;
    let params = ComplaintCreate::from(req);
    if !params.is_complete() {
        return Err(ApiError::MissingField(
            "Invalid complaint details. Title, summary, and severity are required.".to_string(),
        ));
    }
    require(&params.user_secret_code, "User secret code is required")?;

    state.credentials.validate(&params.user_secret_code).await?;
    state.complaints.submit(params).await?;
    Ok(StatusCode::OK)
}

#[instrument(skip_all)]
pub async fn complaints_for_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    let req: SecretCodeReq = parse_body(&body)?;
    let secret = require(&req.secret_code, "Secret code is required")?;

    state.credentials.validate(secret).await?;
    let complaints = state.complaints.list_for_owner(secret).await?;
    Ok(Json(complaints))
}

#[instrument(skip_all)]
pub async fn complaints_for_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    if !state.admin.is_admin(&headers) {
        return Err(ApiError::Unauthorized(
            "Unauthorized: Only admins can access this route".to_string(),
        ));
    }
    let complaints = state.complaints.list_all().await?;
    Ok(Json(complaints))
}

#[instrument(skip_all)]
pub async fn view_complaint(State(state): State<AppState>, body: Bytes) -> Result<Json<Complaint>, ApiError> {
    let req: ComplaintAccessReq = parse_body(&body)?;
    let (secret, complaint_id) = access_fields(&req)?;

    let complaint = state.complaints.view(complaint_id, secret).await?;
    Ok(Json(complaint))
}

#[instrument(skip_all)]
pub async fn resolve_complaint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    let req: ComplaintAccessReq = parse_body(&body)?;
    let (secret, complaint_id) = access_fields(&req)?;

    state.complaints.resolve(complaint_id, secret).await?;
    Ok((StatusCode::OK, "Complaint resolved successfully"))
}

fn access_fields(req: &ComplaintAccessReq) -> Result<(&str, &str), ApiError> {
    if req.secret_code.is_empty() || req.complaint_id.is_empty() {
        return Err(ApiError::MissingField(
            "Secret code and complaint ID are required".to_string(),
        ));
    }
    Ok((&req.secret_code, &req.complaint_id))
}
