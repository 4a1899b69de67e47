//! User route group, mounted under `/api/users`.
//!
//! Like the auth group, this module fixes the route set and parameter
//! shapes while the user store itself lives outside this service.
//! Handlers acknowledge the operation they would perform.

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::get,
};

use crate::api::dto::MessageResponse;
use crate::state::AppState;

/// Creates user-related routes.
///
/// Routes:
/// - GET /        - List users
/// - GET /{id}    - Get user by ID
/// - PUT /{id}    - Update user by ID
/// - DELETE /{id} - Delete user by ID
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

/// GET /api/users - List users
async fn list_users() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::new("User listing requested")),
    )
}

/// GET /api/users/{id} - Get user by ID
async fn get_user(Path(id): Path<u64>) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::new(format!("User {} requested", id))),
    )
}

/// PUT /api/users/{id} - Update user
async fn update_user(Path(id): Path<u64>) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::new(format!("User {} update requested", id))),
    )
}

/// DELETE /api/users/{id} - Delete user
async fn delete_user(Path(id): Path<u64>) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse::new(format!("User {} deletion requested", id))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        use crate::config::Settings;
        use crate::state::AppState;
        user_routes().with_state(AppState::new(Settings::default()))
    }

    #[tokio::test]
    async fn test_list_users() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_user_by_numeric_id() {
        let response = app()
            .oneshot(Request::builder().uri("/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "User 42 requested");
    }

    #[tokio::test]
    async fn test_non_numeric_id_rejected() {
        let response = app()
            .oneshot(Request::builder().uri("/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
