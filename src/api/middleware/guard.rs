//! Application security stage.
//!
//! The guard runs after the parsing stages and immediately before route
//! dispatch, so it sees parsed bodies and cookies like any handler would.
//! It applies two config-driven checks:
//!
//! - a user-agent denylist (substring match, case-insensitive), and
//! - a per-client fixed-window rate limit keyed on the peer address.
//!
//! Both are disabled by default (`guard.enabled = false`), in which case
//! the stage forwards every request untouched.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header::USER_AGENT,
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;

use crate::config::GuardConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Rate-limit window for one client.
#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Guard bookkeeping shared across requests.
///
/// The window table is collaborator-internal state; it is never observed
/// by other pipeline stages.
#[derive(Debug, Default)]
pub struct GuardState {
    windows: DashMap<String, Window>,
}

impl GuardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a request against `key`'s current window.
    ///
    /// Returns `false` when the request exceeds the configured budget.
    fn admit(&self, key: &str, config: &GuardConfig, now: Instant) -> bool {
        let mut entry = self
            .windows
            .entry(key.to_string())
            .or_insert(Window { started: now, count: 0 });

        let elapsed = now.duration_since(entry.started).as_secs();
        if elapsed >= config.window_seconds {
            entry.started = now;
            entry.count = 0;
        }

        entry.count += 1;
        entry.count <= config.max_requests
    }
}

fn blocked_agent(config: &GuardConfig, user_agent: &str) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    config
        .blocked_user_agents
        .iter()
        .any(|pattern| !pattern.is_empty() && agent.contains(&pattern.to_ascii_lowercase()))
}

/// Guard stage.
pub async fn guard_stage(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let config = &state.settings.guard;
    if !config.enabled {
        return next.run(request).await;
    }

    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if blocked_agent(config, user_agent) {
        tracing::warn!(user_agent = %user_agent, "Request denied by user-agent denylist");
        return AppError::ClientDenied {
            message: "Requests from this client are not accepted".to_string(),
        }
        .into_response();
    }

    let client_key = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !state.guard.admit(&client_key, config, Instant::now()) {
        tracing::warn!(client = %client_key, "Request rejected by rate limit");
        return AppError::RateLimited.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config(max_requests: u32) -> GuardConfig {
        GuardConfig {
            enabled: true,
            blocked_user_agents: vec!["badbot".to_string()],
            window_seconds: 60,
            max_requests,
        }
    }

    #[test]
    fn test_admit_within_budget() {
        let state = GuardState::new();
        let config = test_config(3);
        let now = Instant::now();

        assert!(state.admit("10.0.0.1", &config, now));
        assert!(state.admit("10.0.0.1", &config, now));
        assert!(state.admit("10.0.0.1", &config, now));
        assert!(!state.admit("10.0.0.1", &config, now));
    }

    #[test]
    fn test_window_reset_restores_budget() {
        let state = GuardState::new();
        let config = test_config(1);
        let start = Instant::now();

        assert!(state.admit("10.0.0.2", &config, start));
        assert!(!state.admit("10.0.0.2", &config, start));

        let later = start + Duration::from_secs(config.window_seconds + 1);
        assert!(state.admit("10.0.0.2", &config, later));
    }

    #[test]
    fn test_clients_tracked_independently() {
        let state = GuardState::new();
        let config = test_config(1);
        let now = Instant::now();

        assert!(state.admit("10.0.0.3", &config, now));
        assert!(state.admit("10.0.0.4", &config, now));
    }

    #[test]
    fn test_blocked_agent_matches_substring_case_insensitive() {
        let config = test_config(10);
        assert!(blocked_agent(&config, "Mozilla/5.0 BadBot/1.2"));
        assert!(!blocked_agent(&config, "Mozilla/5.0 Firefox/120"));
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let config = GuardConfig {
            enabled: true,
            blocked_user_agents: vec![String::new()],
            ..GuardConfig::default()
        };
        assert!(!blocked_agent(&config, "anything"));
    }
}
