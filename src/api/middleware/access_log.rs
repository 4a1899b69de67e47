//! Access-log pipeline stage.
//!
//! Emits one combined-format line per request that completes normally,
//! at info level under the `acquisitions::access` target, so access
//! entries flow through the same subscriber as the rest of the logs but
//! remain filterable:
//!
//! ```text
//! 127.0.0.1 - - [08/Aug/2026:12:00:00 +0000] "GET /health HTTP/1.1" 200 87 "-" "curl/8.0"
//! ```
//!
//! Requests short-circuited by earlier stages (e.g. a malformed JSON
//! body) never reach this stage and are not access-logged.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::header::{CONTENT_LENGTH, REFERER, USER_AGENT},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

/// Tracing target for access-log lines.
pub const ACCESS_LOG_TARGET: &str = "acquisitions::access";

fn header_or_dash(headers: &axum::http::HeaderMap, name: axum::http::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

/// Access-log stage.
pub async fn access_log_stage(request: Request, next: Next) -> Response {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();
    let referrer = header_or_dash(request.headers(), REFERER);
    let user_agent = header_or_dash(request.headers(), USER_AGENT);

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let content_length = header_or_dash(response.headers(), CONTENT_LENGTH);
    let timestamp = Utc::now().format("%d/%b/%Y:%H:%M:%S %z");

    tracing::info!(
        target: ACCESS_LOG_TARGET,
        "{} - - [{}] \"{} {} {:?}\" {} {} \"{}\" \"{}\"",
        remote,
        timestamp,
        method,
        uri,
        version,
        status,
        content_length,
        referrer,
        user_agent,
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_stage_is_transparent_to_the_response() {
        let app = Router::new()
            .route("/", get(|| async { "hello" }))
            .layer(axum::middleware::from_fn(access_log_stage));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .header(USER_AGENT, "unit-test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
