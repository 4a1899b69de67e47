//! Body-parsing pipeline stages.
//!
//! Two stages, one per supported `Content-Type`:
//!
//! - [`json_body_stage`] buffers `application/json` bodies, parses them
//!   into a [`serde_json::Value`] and attaches the result to the request
//!   as a [`JsonBody`] extension. Malformed JSON short-circuits the
//!   exchange with the fixed 400 payload (see
//!   `AppError::InvalidJsonBody`); downstream stages never see the
//!   request.
//! - [`form_body_stage`] does the same for
//!   `application/x-www-form-urlencoded` bodies, producing a key →
//!   values multimap as a [`FormBody`] extension.
//!
//! Both stages restore the buffered bytes on the request so typed
//! extractors in handlers keep working.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Parsed JSON request body, available to later stages and handlers.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Arc<serde_json::Value>);

/// Parsed form request body as a key → values multimap.
///
/// Repeated keys accumulate in submission order. Bracketed keys are kept
/// as literal strings; nothing on this route surface consumes nested
/// form data.
#[derive(Clone, Debug)]
pub struct FormBody(pub Arc<HashMap<String, Vec<String>>>);

/// The essence of a `Content-Type` header value: the media type without
/// parameters such as `charset`.
fn content_type_essence(request: &Request) -> Option<String> {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
}

/// JSON body-parsing stage.
///
/// Requests without a JSON content type, and JSON requests with an empty
/// body, pass through untouched.
pub async fn json_body_stage(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if content_type_essence(&request).as_deref() != Some("application/json") {
        return next.run(request).await;
    }

    let limit = state.settings.server.body_limit;
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return AppError::UnreadableBody {
                detail: e.to_string(),
            }
            .into_response();
        }
    };

    let mut request = Request::from_parts(parts, Body::from(bytes.clone()));

    if bytes.is_empty() {
        return next.run(request).await;
    }

    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(value) => {
            request.extensions_mut().insert(JsonBody(Arc::new(value)));
            next.run(request).await
        }
        Err(e) => AppError::InvalidJsonBody {
            detail: e.to_string(),
        }
        .into_response(),
    }
}

/// URL-encoded body-parsing stage.
pub async fn form_body_stage(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if content_type_essence(&request).as_deref() != Some("application/x-www-form-urlencoded") {
        return next.run(request).await;
    }

    let limit = state.settings.server.body_limit;
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return AppError::UnreadableBody {
                detail: e.to_string(),
            }
            .into_response();
        }
    };

    let mut request = Request::from_parts(parts, Body::from(bytes.clone()));

    if bytes.is_empty() {
        return next.run(request).await;
    }

    match serde_urlencoded::from_bytes::<Vec<(String, String)>>(&bytes) {
        Ok(pairs) => {
            let mut fields: HashMap<String, Vec<String>> = HashMap::new();
            for (key, value) in pairs {
                fields.entry(key).or_default().push(value);
            }
            request
                .extensions_mut()
                .insert(FormBody(Arc::new(fields)));
            next.run(request).await
        }
        Err(e) => AppError::MalformedFormBody {
            detail: e.to_string(),
        }
        .into_response(),
    }
}
