//! Logger error types

use thiserror::Error;

/// Errors raised while initializing the logging subsystem
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Configuration rejected before initialization
    #[error("Invalid logger configuration: {0}")]
    InvalidConfig(String),

    /// Log file or its parent directory could not be created
    #[error("Failed to open log file: {0}")]
    FileOpen(#[from] std::io::Error),
}
