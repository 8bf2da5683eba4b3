//! Error types for spiral layouts.

use thiserror::Error;

/// Result type for spiral operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a spiral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn negative_count(n: i64) -> Self {
        Error::InvalidInput(format!("count must be non-negative, got {}", n))
    }
}
