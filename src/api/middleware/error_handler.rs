//! Error handler for converting AppError to HTTP responses.
//!
//! This is where diverted errors terminate the exchange: each `AppError`
//! variant maps to a status code and a structured JSON payload. Internal
//! detail (parse positions, source errors) is logged here and never echoed
//! to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - InvalidJsonBody → 400 BAD_REQUEST (fixed payload)
    /// - UnreadableBody → 400 BAD_REQUEST
    /// - MalformedFormBody → 400 BAD_REQUEST
    /// - Validation → 400 BAD_REQUEST
    /// - BadRequest → 400 BAD_REQUEST
    /// - ClientDenied → 403 FORBIDDEN
    /// - RateLimited → 429 TOO_MANY_REQUESTS
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidJsonBody { detail } => {
                tracing::error!("JSON parsing error: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "Invalid JSON format",
                        "Please check your request body format",
                    ),
                )
            }
            AppError::UnreadableBody { detail } => {
                tracing::error!("Failed to read request body: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Unreadable body", "The request body could not be read"),
                )
            }
            AppError::MalformedFormBody { detail } => {
                tracing::error!("Form parsing error: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "Invalid form data",
                        "Please check your request body format",
                    ),
                )
            }
            AppError::Validation { detail } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed", detail),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Bad request", message),
            ),
            AppError::ClientDenied { message } => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("Forbidden", message),
            ),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new("Too many requests", "Request rate limit exceeded, slow down"),
            ),
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %source, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal error", "An internal error occurred"),
                )
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal error", "An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[tokio::test]
    async fn test_invalid_json_body_produces_fixed_payload() {
        let response = AppError::InvalidJsonBody {
            detail: "expected value at line 1 column 6".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Invalid JSON format","message":"Please check your request body format"}"#
        );
    }

    #[tokio::test]
    async fn test_internal_error_does_not_leak_source() {
        let response = AppError::Internal {
            source: anyhow::anyhow!("secret database string"),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(!body.contains("secret"));
    }

    #[tokio::test]
    async fn test_rate_limited_maps_to_429() {
        let response = AppError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_client_denied_maps_to_403() {
        let response = AppError::ClientDenied {
            message: "blocked".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
