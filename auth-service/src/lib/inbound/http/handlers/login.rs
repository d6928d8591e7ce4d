use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Verify credentials against the directory and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    tracing::info!(username = %body.username, "Login attempt");

    let identity = state
        .credentials
        .verify(&body.username, &body.password)
        .await
        .map_err(|e| {
            tracing::warn!(username = %body.username, "Login failed: {}", e);
            ApiError::from(e)
        })?;

    let token = state
        .jwt_codec
        .issue(&identity.subject, &identity.role)
        .map_err(|e| {
            tracing::error!("Token generation failed: {}", e);
            ApiError::InternalServerError("An unexpected error occurred".to_string())
        })?;

    tracing::info!(username = %identity.subject, "Login successful");

    Ok(ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
