//! Cookie-parsing pipeline stage.
//!
//! Splits the `Cookie` request header into a name → value map and attaches
//! it to the request as a [`RequestCookies`] extension. The stage always
//! forwards; requests without cookies carry an empty map so downstream
//! stages can rely on the extension being present.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::Request, http::header::COOKIE, middleware::Next, response::Response,
};

/// Parsed request cookies, name → value.
#[derive(Clone, Debug)]
pub struct RequestCookies(pub Arc<HashMap<String, String>>);

impl RequestCookies {
    /// Look up a cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Parse a `Cookie` header value into name/value pairs.
///
/// Pairs without an `=` are skipped; whitespace around names is trimmed
/// per RFC 6265 cookie-string syntax.
fn parse_cookie_header(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if let (Some(name), Some(value)) = (parts.next(), parts.next()) {
            if !name.is_empty() {
                cookies.insert(name.to_string(), value.to_string());
            }
        }
    }
    cookies
}

/// Cookie-parsing stage.
pub async fn cookie_stage(mut request: Request, next: Next) -> Response {
    let cookies = request
        .headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(parse_cookie_header)
        .unwrap_or_default();

    request
        .extensions_mut()
        .insert(RequestCookies(Arc::new(cookies)));

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Extension, Json, Router, body::Body, body::to_bytes, http::StatusCode, routing::get,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/cookies",
                get(|Extension(RequestCookies(cookies)): Extension<RequestCookies>| async move {
                    Json(cookies.as_ref().clone())
                }),
            )
            .layer(axum::middleware::from_fn(cookie_stage))
    }

    #[test]
    fn test_parse_cookie_header() {
        let cookies = parse_cookie_header("a=1; b=2");
        assert_eq!(cookies.get("a").map(String::as_str), Some("1"));
        assert_eq!(cookies.get("b").map(String::as_str), Some("2"));
        assert_eq!(cookies.len(), 2);
    }

    #[test]
    fn test_parse_keeps_equals_in_value() {
        let cookies = parse_cookie_header("token=abc=def");
        assert_eq!(cookies.get("token").map(String::as_str), Some("abc=def"));
    }

    #[test]
    fn test_parse_skips_malformed_pairs() {
        let cookies = parse_cookie_header("orphan; a=1");
        assert_eq!(cookies.len(), 1);
        assert!(cookies.contains_key("a"));
    }

    #[tokio::test]
    async fn test_cookies_visible_downstream() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/cookies")
                    .header(COOKIE, "a=1; b=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let cookies: HashMap<String, String> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(cookies["a"], "1");
        assert_eq!(cookies["b"], "2");
    }

    #[tokio::test]
    async fn test_missing_header_yields_empty_map() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/cookies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let cookies: HashMap<String, String> = serde_json::from_slice(&bytes).unwrap();
        assert!(cookies.is_empty());
    }
}
