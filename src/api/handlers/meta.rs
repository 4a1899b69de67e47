//! Root and API-index handlers.

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::MessageResponse;

/// GET / - Service greeting
///
/// Logs a fixed informational message and returns the greeting as plain
/// text.
pub async fn root() -> impl IntoResponse {
    tracing::info!("Hello from Acquisitions!");

    (StatusCode::OK, "Hello from Acquisitions!")
}

/// GET /api - API index
pub async fn api_index() -> impl IntoResponse {
    // The trailing space is part of the published literal
    (
        StatusCode::OK,
        Json(MessageResponse::new("Acquisitions API is running! ")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_root_body_is_exact_literal() {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8_lossy(&bytes), "Hello from Acquisitions!");
    }

    #[tokio::test]
    async fn test_api_index_keeps_trailing_space() {
        let response = api_index().await.into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            String::from_utf8_lossy(&bytes),
            r#"{"message":"Acquisitions API is running! "}"#
        );
    }
}
