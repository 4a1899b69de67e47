//! CLI module for the Acquisitions service
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration loading and CLI-override merging
//! - Dry-run configuration validation

pub mod parser;

pub use parser::{Cli, Commands};

use crate::config::{ConfigLoader, Settings};

/// Load configuration and apply CLI overrides
///
/// Loading order:
/// 1. Layered files (or the single `--config` file when given)
/// 2. `ACQUISITIONS_*` environment variables
/// 3. CLI flags (`--env`, `--verbose`/`--quiet`, serve `--host`/`--port`)
///
/// # Errors
/// Returns error if configuration loading or validation fails.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut loader = match &cli.config {
        Some(path) => ConfigLoader::from_file(path)?,
        None => ConfigLoader::new(),
    };

    if let Some(env) = cli.env {
        loader = loader.with_environment(env.into());
    }

    let mut settings = loader.load()?;

    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    if let Some(Commands::Serve { host, port, .. }) = &cli.command {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
    }

    // Re-validate after overrides; a CLI flag must not smuggle in a value
    // that file validation would have rejected
    settings.validate()?;

    Ok(settings)
}

/// Validate configuration and report without starting the server
///
/// Used by `serve --dry-run`.
pub fn dry_run_report(settings: &Settings) {
    println!("✓ Configuration is valid");
    println!("✓ Server would bind to: {}", settings.server.address());
    println!(
        "✓ Logger: level={}, console={}, file={}",
        settings.logger.level, settings.logger.console.enabled, settings.logger.file.enabled
    );
    println!(
        "✓ Request guard: {}",
        if settings.guard.enabled { "enabled" } else { "disabled" }
    );
    println!("Dry run completed successfully - configuration is ready for deployment");
}
