//! Configuration settings structures for the Acquisitions service
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "acquisitions".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_body_limit() -> usize {
    1024 * 1024 // 1MB
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_frame_options() -> String {
    "DENY".to_string()
}

fn default_content_security_policy() -> String {
    "default-src 'self'".to_string()
}

fn default_referrer_policy() -> String {
    "no-referrer".to_string()
}

fn default_hsts_max_age() -> u64 {
    15_552_000 // 180 days
}

fn default_window_seconds() -> u64 {
    60
}

fn default_max_requests() -> u32 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

impl ServerConfig {
    /// Full bind address as `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit: default_body_limit(),
        }
    }
}

// ============================================================================
// CORS Configuration
// ============================================================================

/// Cross-origin resource sharing configuration
///
/// The default is permissive (`*`); listing concrete origins restricts the
/// `Access-Control-Allow-Origin` response to that set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` anywhere in the list means any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

// ============================================================================
// Security Headers Configuration
// ============================================================================

/// Hardening response headers added to every response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityHeadersConfig {
    /// `X-Frame-Options` value
    #[serde(default = "default_frame_options")]
    pub frame_options: String,

    /// `Content-Security-Policy` value
    #[serde(default = "default_content_security_policy")]
    pub content_security_policy: String,

    /// `Referrer-Policy` value
    #[serde(default = "default_referrer_policy")]
    pub referrer_policy: String,

    /// Whether to emit `Strict-Transport-Security` (HTTPS deployments only)
    #[serde(default)]
    pub hsts_enabled: bool,

    /// HSTS max-age in seconds
    #[serde(default = "default_hsts_max_age")]
    pub hsts_max_age: u64,

    /// Whether HSTS covers subdomains
    #[serde(default)]
    pub hsts_include_subdomains: bool,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            frame_options: default_frame_options(),
            content_security_policy: default_content_security_policy(),
            referrer_policy: default_referrer_policy(),
            hsts_enabled: false,
            hsts_max_age: default_hsts_max_age(),
            hsts_include_subdomains: false,
        }
    }
}

// ============================================================================
// Request Guard Configuration
// ============================================================================

/// Application security middleware configuration
///
/// Disabled by default; when enabled the guard applies a user-agent
/// denylist and a per-client fixed-window rate limit before route dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Master switch for the guard stage
    #[serde(default)]
    pub enabled: bool,

    /// Substrings matched case-insensitively against `User-Agent`
    #[serde(default)]
    pub blocked_user_agents: Vec<String>,

    /// Rate-limit window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    /// Maximum requests per client per window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            blocked_user_agents: Vec::new(),
            window_seconds: default_window_seconds(),
            max_requests: default_max_requests(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger settings as loaded from configuration sources
///
/// Converted into the logger module's validated `LoggerConfig` via
/// [`LoggerSettings::into_logger_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level filter (`trace`..`error`, or an env-filter directive)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

/// Console logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub colored: bool,
}

/// File logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_path")]
    pub path: String,
    /// Output format: `full`, `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            format: default_log_format(),
        }
    }
}

impl LoggerSettings {
    /// Convert loaded settings into the logger module's configuration
    ///
    /// # Errors
    /// Returns a `ConfigError` when the file format string is not one of
    /// the supported formats.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format: LogFormat = self.file.format.parse().map_err(|e: String| {
            ConfigError::validation("logger.file.format".to_string(), e)
        })?;

        Ok(LoggerConfig {
            level: self.level,
            console: ConsoleConfig {
                enabled: self.console.enabled,
                colored: self.console.colored,
            },
            file: FileConfig {
                enabled: self.file.enabled,
                path: self.file.path.into(),
                format,
            },
        })
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS settings
    #[serde(default)]
    pub cors: CorsConfig,

    /// Security header settings
    #[serde(default)]
    pub security_headers: SecurityHeadersConfig,

    /// Request guard settings
    #[serde(default)]
    pub guard: GuardConfig,

    /// Logger settings
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validate the loaded settings
    ///
    /// # Errors
    /// Returns the first `ConfigError` found. Validation is fail-fast so a
    /// broken deployment never reaches the bind step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::validation("server.port", "port must not be 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "host must not be empty",
            ));
        }

        if self.server.body_limit == 0 {
            return Err(ConfigError::validation(
                "server.body_limit",
                "body limit must be greater than 0",
            ));
        }

        if self.guard.enabled {
            if self.guard.window_seconds == 0 {
                return Err(ConfigError::validation(
                    "guard.window_seconds",
                    "rate-limit window must be greater than 0",
                ));
            }
            if self.guard.max_requests == 0 {
                return Err(ConfigError::validation(
                    "guard.max_requests",
                    "max requests per window must be greater than 0",
                ));
            }
        }

        // Surface logger format errors at load time instead of at init
        self.logger.clone().into_logger_config()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.cors.allowed_origins, vec!["*".to_string()]);
        assert!(!settings.guard.enabled);
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_guard_window_validated_only_when_enabled() {
        let mut settings = Settings::default();
        settings.guard.window_seconds = 0;
        assert!(settings.validate().is_ok());

        settings.guard.enabled = true;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_log_format_rejected() {
        let mut settings = Settings::default();
        settings.logger.file.format = "yaml".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_logger_settings_conversion() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            console: ConsoleSettings {
                enabled: true,
                colored: false,
            },
            file: FileSettings {
                enabled: true,
                path: "logs/test.log".to_string(),
                format: "json".to_string(),
            },
        };

        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert!(!config.console.colored);
        assert_eq!(config.file.format, LogFormat::Json);
    }
}
