//! Core error types and definitions

use crate::codec::Encoding;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
///
/// Cloning is cheap; the payload is shared.
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// User-facing error taxonomy
///
/// Every failure the toolkit reports ends up as exactly one of these.
/// None of them is fatal; callers show the message and let the user retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Empty or out-of-range input, rejected before any cryptographic work
    #[error("Invalid input")]
    Validation,

    /// Text that should be hex or base64 is not
    #[error("Malformed {0} input")]
    MalformedEncoding(Encoding),

    /// Bytes are not valid UTF-8
    #[error("Result is not valid UTF-8 text")]
    Decode,

    /// AES-GCM ciphertext too short to hold salt and nonce
    #[error("Ciphertext is too short to be an AES-GCM envelope")]
    MalformedEnvelope,

    /// Authenticated decryption failed. Deliberately says nothing about why.
    #[error("Decryption failed: wrong password or corrupted ciphertext")]
    DecryptionFailed,

    /// Provider or runtime failure
    #[error("Internal error")]
    Internal,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())?;
        if let Some(source) = &self.inner.source {
            write!(f, " (caused by: {source})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
