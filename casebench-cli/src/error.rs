//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Requested algorithm is not registered
    UnknownAlgorithm(String),
    /// Malformed size sweep on the command line
    InvalidSweep(String),
    /// Output destination could not be opened or written
    OutputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {name}"),
            CliError::InvalidSweep(msg) => write!(f, "Invalid size sweep: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
