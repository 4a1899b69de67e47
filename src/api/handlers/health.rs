//! Health check endpoint handler.
//!
//! Reports process liveness for monitoring and load balancer checks.
//! There are no external dependencies to probe, so the check is a
//! constant-status snapshot of the process clock.

use axum::{extract::State, response::Json};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::HealthResponse;
use crate::state::AppState;

/// GET /health - Process health snapshot
///
/// # Example Response
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2026-08-08T12:00:00.000Z",
///   "uptime": 42.108
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime_seconds(),
    })
}
