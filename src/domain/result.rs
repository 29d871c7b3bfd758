//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Domain failures (duplicate email, unknown email) are never errors; they
/// are explicit outcome enums on the service that produces them. This type
/// covers the infrastructure edges only: storage writes and invalid input
/// that cannot be expressed as an outcome.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
