//! CLI error type.

use greekstep_models::ModelError;
use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors raised at the service boundary.
///
/// The numerical core never errors; everything here comes from argument
/// handling, scenario loading, or record persistence.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown built-in scenario name.
    #[error("Unknown scenario: {0}. Run `greekstep scenarios` for the list")]
    UnknownScenario(String),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Scenario file not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Scenario parameters failed validation.
    #[error("Invalid scenario: {0}")]
    Model(#[from] ModelError),

    /// TOML parse failure in a scenario file.
    #[error("Failed to parse scenario file: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
