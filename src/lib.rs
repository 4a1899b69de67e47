//! Acquisitions Library
//!
//! Core library modules for the Acquisitions web service.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod state;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
