//! Logger configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::logger::error::LoggerError;

/// Output format for the file log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field format
    Full,
    /// Single-line abbreviated format
    Compact,
    /// Structured JSON, one object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format '{}'. Valid values are: full, compact, json",
                s
            )),
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Whether console output is enabled
    pub enabled: bool,
    /// Whether to use ANSI colors (only applied when stdout is a TTY)
    pub colored: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Whether file output is enabled
    pub enabled: bool,
    /// Log file path; parent directories are created on init
    pub path: PathBuf,
    /// Output format for the file layer
    pub format: LogFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/app.log"),
            format: LogFormat::Full,
        }
    }
}

/// Complete logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Level filter: a plain level name or an env-filter directive string
    pub level: String,
    /// Console output settings
    pub console: ConsoleConfig,
    /// File output settings
    pub file: FileConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl LoggerConfig {
    /// Validate the configuration before initialization
    ///
    /// # Errors
    /// Returns `LoggerError::InvalidConfig` when no output is enabled or
    /// the file path is empty while file output is on.
    pub fn validate(&self) -> Result<(), LoggerError> {
        if !self.console.enabled && !self.file.enabled {
            return Err(LoggerError::InvalidConfig(
                "at least one output (console or file) must be enabled".to_string(),
            ));
        }

        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            return Err(LoggerError::InvalidConfig(
                "file output enabled but no path configured".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(LoggerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_all_outputs_disabled_rejected() {
        let config = LoggerConfig {
            console: ConsoleConfig {
                enabled: false,
                colored: false,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_file_path_rejected() {
        let config = LoggerConfig {
            file: FileConfig {
                enabled: true,
                path: PathBuf::new(),
                format: LogFormat::Full,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
