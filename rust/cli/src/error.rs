//! Error types for the CLI application.

use guozha_ai::autoplay::AutoplayError;
use guozha_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Every failure a subcommand can report. All of them map to exit code `2`.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A transition the engine refused
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    #[error("Autoplay error: {0}")]
    Autoplay(#[from] AutoplayError),
}
