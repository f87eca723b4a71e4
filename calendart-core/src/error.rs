//! Error types for calendart.

use thiserror::Error;

/// Errors that can occur in calendart operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Status not recognized: had \"{value}\", expected one of {expected}")]
    InvalidStatus { value: i64, expected: String },

    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calendart operations.
pub type CoreResult<T> = Result<T, CoreError>;
