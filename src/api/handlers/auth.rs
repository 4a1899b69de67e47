//! Authentication route group, mounted under `/api/auth`.
//!
//! This module fixes the route set and payload shapes. Credential storage
//! and session issuance live in the upstream identity service; handlers
//! here validate the payload and acknowledge the request.

use axum::{Json, Router, http::StatusCode, routing::post};
use validator::Validate;

use crate::api::dto::{MessageResponse, SignInRequest, SignUpRequest};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Creates the authentication routes
///
/// # Routes
/// - `POST /sign-up` - Register a new account
/// - `POST /sign-in` - Start a session
/// - `POST /sign-out` - End the current session
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
}

/// POST /api/auth/sign-up - Register a new account
async fn sign_up(
    Json(payload): Json<SignUpRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    payload.validate().map_err(|e| AppError::Validation {
        detail: e.to_string(),
    })?;

    tracing::info!(email = %payload.email, "Sign-up request accepted");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Sign-up request accepted")),
    ))
}

/// POST /api/auth/sign-in - Start a session
async fn sign_in(
    Json(payload): Json<SignInRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    payload.validate().map_err(|e| AppError::Validation {
        detail: e.to_string(),
    })?;

    tracing::info!(email = %payload.email, "Sign-in request accepted");

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Sign-in request accepted")),
    ))
}

/// POST /api/auth/sign-out - End the current session
async fn sign_out() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::new("Sign-out request accepted")),
    )
}
