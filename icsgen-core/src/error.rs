//! Error types for icsgen.

use thiserror::Error;

/// Errors raised while building or writing a calendar.
#[derive(Error, Debug)]
pub enum IcsError {
    /// The calendar was given a timezone identifier the registry does not know.
    #[error("Invalid timezone identifier: {0}")]
    Configuration(String),

    /// An event was generated while a required field was unset.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration file error: {0}")]
    Config(String),

    #[error("Invalid input document: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for icsgen operations.
pub type IcsResult<T> = Result<T, IcsError>;
