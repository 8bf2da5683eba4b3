//! Error types for the numspiral binary.

use thiserror::Error;

/// Errors that end a numspiral run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or extra arguments
    #[error("{0}")]
    Usage(String),

    /// Count argument is not an integer
    #[error("Invalid count {0:?}: expected an integer")]
    InvalidCount(String),

    /// Spiral construction failed
    #[error(transparent)]
    Spiral(#[from] numspiral_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}
