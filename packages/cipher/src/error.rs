//! Error handling for cipher operations

use cipherlab_common::{Error, ErrorKind};
use cipherlab_key::KeyError;
use thiserror::Error;

/// Cipher-specific errors
#[derive(Debug, Error)]
pub enum CipherError {
    /// Input rejected before any cryptographic work
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Buffer too short to hold the salt and nonce prefix
    #[error("Envelope too short: need at least {minimum} bytes, got {actual}")]
    MalformedEnvelope {
        /// Minimum envelope length in bytes
        minimum: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Authenticated decryption failed
    ///
    /// Carries no detail on purpose: wrong password, flipped bit and
    /// truncated tag all look the same to the caller.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// The AEAD provider refused to encrypt
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Key derivation failed
    #[error("Key derivation error: {0}")]
    KeyDerivation(#[from] KeyError),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CipherError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The user-facing kind this error belongs to
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::MalformedEnvelope { .. } => ErrorKind::MalformedEnvelope,
            Self::DecryptionFailed => ErrorKind::DecryptionFailed,
            Self::EncryptionFailed(_) | Self::KeyDerivation(_) | Self::Internal(_) => {
                ErrorKind::Internal
            }
        }
    }
}

impl From<CipherError> for Error {
    fn from(err: CipherError) -> Self {
        match err {
            CipherError::Validation(msg) => Error::validation().context(msg),
            CipherError::MalformedEnvelope { minimum, actual } => Error::malformed_envelope()
                .context(format!("need at least {minimum} bytes, got {actual}")),
            CipherError::DecryptionFailed => Error::decryption_failed(),
            other => Error::with_source(other.kind(), other),
        }
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
