//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Environment;

/// The Acquisitions HTTP API service
#[derive(Parser, Debug)]
#[command(name = "acquisitions")]
#[command(about = "HTTP API service for the Acquisitions application")]
#[command(long_about = "
The Acquisitions API server: an ordered request-processing pipeline
(security headers, body parsing, CORS, cookies, access logging, request
guard) in front of the service's route groups.

EXAMPLES:
    # Start the server with default configuration
    acquisitions serve

    # Start server on custom host and port
    acquisitions serve --host 0.0.0.0 --port 8080

    # Use a single explicit configuration file
    acquisitions --config /etc/acquisitions/production.toml serve

    # Run in development mode with verbose logging
    acquisitions --env development --verbose serve

    # Check configuration without starting the server
    acquisitions serve --dry-run
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// A single TOML file used instead of the layered configuration
    /// directory. The file must exist and be readable.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Forces a specific environment instead of reading
    /// ACQUISITIONS_APP_ENV. Affects which configuration layer is loaded.
    #[arg(short, long, value_enum)]
    pub env: Option<CliEnvironment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without binding
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment values accepted on the command line
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum CliEnvironment {
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "prod")]
    Production,
}

impl From<CliEnvironment> for Environment {
    fn from(value: CliEnvironment) -> Self {
        match value {
            CliEnvironment::Development => Environment::Development,
            CliEnvironment::Test => Environment::Test,
            CliEnvironment::Production => Environment::Production,
        }
    }
}
