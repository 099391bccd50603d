//! Typed request handed to [`CipherFacade`](crate::CipherFacade)

use cipherlab_cipher::CipherAlgorithm;
use cipherlab_common::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Which way the cipher runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// One cipher operation as a UI would submit it
///
/// `key` holds the XOR key or the AES password and is ignored by Caesar;
/// `shift` is only read by Caesar. On encrypt the result is rendered in
/// `output_format`; on decrypt the payload is parsed from it.
///
/// The payload and key are wiped when the request is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct CipherRequest {
    /// Cipher to run
    #[zeroize(skip)]
    pub algorithm: CipherAlgorithm,
    /// Encrypt or decrypt
    #[zeroize(skip)]
    pub direction: Direction,
    /// Input text
    pub payload: String,
    /// XOR key or AES password
    #[serde(default)]
    pub key: String,
    /// Caesar shift, `1..=25`
    #[serde(default)]
    pub shift: i64,
    /// Presentation of the ciphertext side
    #[serde(default)]
    #[zeroize(skip)]
    pub output_format: OutputFormat,
}

impl CipherRequest {
    /// Caesar request; ciphertext is plain text
    pub fn caesar(direction: Direction, payload: impl Into<String>, shift: i64) -> Self {
        Self {
            algorithm: CipherAlgorithm::Caesar,
            direction,
            payload: payload.into(),
            key: String::new(),
            shift,
            output_format: CipherAlgorithm::Caesar.default_format(),
        }
    }

    /// Repeating-key XOR request; ciphertext defaults to base64
    pub fn otp(direction: Direction, payload: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            algorithm: CipherAlgorithm::Otp,
            direction,
            payload: payload.into(),
            key: key.into(),
            shift: 0,
            output_format: CipherAlgorithm::Otp.default_format(),
        }
    }

    /// AES-256-GCM request; ciphertext defaults to base64
    pub fn aes(
        direction: Direction,
        payload: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            algorithm: CipherAlgorithm::Aes256Gcm,
            direction,
            payload: payload.into(),
            key: password.into(),
            shift: 0,
            output_format: CipherAlgorithm::Aes256Gcm.default_format(),
        }
    }

    /// Set the ciphertext presentation
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

impl fmt::Debug for CipherRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherRequest")
            .field("algorithm", &self.algorithm)
            .field("direction", &self.direction)
            .field("payload_len", &self.payload.len())
            .field("key", &"<redacted>")
            .field("shift", &self.shift)
            .field("output_format", &self.output_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secrets() {
        let request = CipherRequest::otp(Direction::Encrypt, "top secret text", "my key");
        let debug = format!("{request:?}");
        assert!(!debug.contains("top secret"));
        assert!(!debug.contains("my key"));
        assert!(debug.contains("payload_len: 15"));
    }
}
