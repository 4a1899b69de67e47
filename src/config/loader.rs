//! Configuration loader for the Acquisitions service
//!
//! Handles loading configuration from layered sources with proper
//! precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment as EnvSource, File, FileFormat};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for the configuration directory
const CONFIG_DIR_ENV: &str = "ACQUISITIONS_CONFIG_DIR";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ACQUISITIONS";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority (later wins):
/// 1. `default.toml` - base configuration (optional)
/// 2. `{environment}.toml` - environment-specific configuration (optional)
/// 3. `local.toml` - local development overrides (optional)
/// 4. `ACQUISITIONS_*` environment variables (nested keys joined with `__`,
///    e.g. `ACQUISITIONS_SERVER__PORT`)
///
/// All file layers are optional: the service runs on built-in defaults
/// when no configuration directory exists.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Explicit configuration file (skips layered loading when set)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: Environment,
}

impl ConfigLoader {
    /// Create a new loader from the process environment
    ///
    /// Reads `ACQUISITIONS_CONFIG_DIR` for the configuration directory and
    /// `ACQUISITIONS_APP_ENV` for the active environment.
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self {
            config_dir,
            config_file: None,
            environment: Environment::from_env(),
        }
    }

    /// Create a loader that reads a single explicit configuration file
    ///
    /// Used for the CLI `--config` flag. The file must exist.
    ///
    /// # Errors
    /// Returns `ConfigError::FileNotFound` when the path does not exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        Ok(Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.to_path_buf()),
            environment: Environment::from_env(),
        })
    }

    /// Override the detected environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Load settings from all configured sources
    ///
    /// # Errors
    /// Returns an error when a file fails to parse, deserialization fails,
    /// or the resulting settings fail validation.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = &self.config_file {
            builder = builder.add_source(
                File::from(file.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        } else {
            let layers = [
                "default".to_string(),
                self.environment.as_str().to_string(),
                "local".to_string(),
            ];
            for layer in layers {
                builder = builder.add_source(
                    File::from(self.config_dir.join(layer))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        builder = builder.add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::Other)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
