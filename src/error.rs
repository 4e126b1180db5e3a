//! Error types for the CaseLens artifact engine.
//!
//! Classification, rendering and summarisation are infallible by contract;
//! the variants here cover the edges that touch the filesystem or serde.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CaseLens operations.
#[derive(Debug, Error)]
pub enum CaseLensError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rejected configuration values
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Staging write failed for a specific destination
    #[error("Staging failed for {}: {message}", path.display())]
    Staging { path: PathBuf, message: String },
}

/// Result type alias for CaseLens operations
pub type Result<T> = std::result::Result<T, CaseLensError>;

impl From<serde_json::Error> for CaseLensError {
    fn from(err: serde_json::Error) -> Self {
        CaseLensError::Serialization(format!("JSON error: {}", err))
    }
}
