//! Error handling for key derivation

use cipherlab_common::{Error, ErrorKind};
use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key derivation was asked to run without a salt
    #[error("Salt not provided for key derivation")]
    MissingSalt,

    /// KDF parameters cannot be used
    #[error("Invalid KDF parameters: {0}")]
    InvalidParameters(String),

    /// Salt has the wrong size for the configured protocol
    #[error("Invalid salt length: expected {expected}, got {actual}")]
    InvalidSaltLength {
        /// Expected salt length in bytes
        expected: usize,
        /// Actual salt length in bytes
        actual: usize,
    },
}

impl KeyError {
    /// Create an invalid-parameters error
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

// Key errors only arise from programming mistakes, never from user input
impl From<KeyError> for Error {
    fn from(err: KeyError) -> Self {
        Error::with_source(ErrorKind::Internal, err)
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
