//! Application state for the Axum web framework.
//!
//! Process-wide facilities (start time, loaded settings, guard table) are
//! owned here and injected into handlers and middleware through Axum's
//! `State` extractor instead of being looked up globally.

use std::sync::Arc;
use std::time::Instant;

use crate::api::middleware::GuardState;
use crate::config::Settings;

/// Shared application state.
///
/// Cloning is cheap: everything inside is either `Copy` or behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Loaded and validated configuration
    pub settings: Arc<Settings>,
    /// Process start instant, the basis for health-check uptime
    pub started_at: Instant,
    /// Request guard bookkeeping (rate-limit windows)
    pub guard: Arc<GuardState>,
}

impl AppState {
    /// Creates the process-wide state. Called once at startup, before the
    /// router is assembled.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            started_at: Instant::now(),
            guard: Arc::new(GuardState::new()),
        }
    }

    /// Seconds elapsed since process startup, fractional.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_is_monotonic() {
        let state = AppState::new(Settings::default());
        let first = state.uptime_seconds();
        let second = state.uptime_seconds();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_clones_share_start_instant() {
        let state = AppState::new(Settings::default());
        let clone = state.clone();
        assert_eq!(state.started_at, clone.started_at);
    }
}
