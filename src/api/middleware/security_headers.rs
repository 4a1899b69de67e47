//! Security headers middleware for HTTP responses.
//!
//! Adds hardening headers (content-type sniffing prevention, frame
//! embedding restriction, CSP, referrer policy, optional HSTS) to every
//! response. The header set is built once at startup from configuration
//! and shared across requests via an `Extension` layer.

use std::sync::Arc;

use axum::{
    Extension,
    extract::Request,
    http::{
        HeaderMap, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::config::SecurityHeadersConfig;

/// Build the hardening header set from configuration.
#[must_use]
pub fn build_security_headers(config: &SecurityHeadersConfig) -> Arc<HeaderMap> {
    let mut headers = HeaderMap::new();

    // X-Content-Type-Options: nosniff (always)
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

    // X-Frame-Options
    if let Ok(value) = HeaderValue::from_str(&config.frame_options) {
        headers.insert(X_FRAME_OPTIONS, value);
    }

    // X-XSS-Protection (legacy but still useful for older browsers)
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));

    // Content-Security-Policy
    if let Ok(value) = HeaderValue::from_str(&config.content_security_policy) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    // Referrer-Policy
    if let Ok(value) = HeaderValue::from_str(&config.referrer_policy) {
        headers.insert(REFERRER_POLICY, value);
    }

    // HSTS only makes sense behind HTTPS, so it is opt-in
    if config.hsts_enabled {
        let hsts_value = if config.hsts_include_subdomains {
            format!("max-age={}; includeSubDomains", config.hsts_max_age)
        } else {
            format!("max-age={}", config.hsts_max_age)
        };
        if let Ok(value) = HeaderValue::from_str(&hsts_value) {
            headers.insert(STRICT_TRANSPORT_SECURITY, value);
        }
    }

    Arc::new(headers)
}

/// Applies the prebuilt header set to every response.
///
/// Registered as the first pipeline stage so every response, including
/// short-circuited error responses from later stages, carries the headers.
pub async fn security_headers_stage(
    Extension(headers): Extension<Arc<HeaderMap>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let response_headers = response.headers_mut();
    for (name, value) in headers.iter() {
        response_headers.insert(name.clone(), value.clone());
    }
    response
}
