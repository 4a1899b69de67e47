//! Middleware stages for request processing.
//!
//! Each submodule is one pipeline stage; `routes::create_router` composes
//! them in registration order. A stage forwards the request, terminates
//! the exchange itself, or returns an `AppError` that `error_handler`
//! converts into the terminal response.

mod access_log;
mod body_parser;
mod cookies;
mod error_handler;
mod guard;
mod request_id;
mod security_headers;

pub use access_log::{ACCESS_LOG_TARGET, access_log_stage};
pub use body_parser::{FormBody, JsonBody, form_body_stage, json_body_stage};
pub use cookies::{RequestCookies, cookie_stage};
pub use guard::{GuardState, guard_stage};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_stage};
pub use security_headers::{build_security_headers, security_headers_stage};
