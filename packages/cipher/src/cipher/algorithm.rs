//! Cipher algorithm definitions and metadata

use crate::CipherError;
use cipherlab_common::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithms offered by the toolkit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherAlgorithm {
    /// Caesar shift over ASCII letters
    #[serde(rename = "caesar")]
    Caesar,

    /// Repeating-key XOR presented as a one-time pad
    #[serde(rename = "otp")]
    Otp,

    /// AES-256-GCM with a PBKDF2-derived key
    ///
    /// - 256-bit key from PBKDF2-HMAC-SHA256, 100 000 iterations
    /// - 128-bit salt, 96-bit nonce, 128-bit tag
    #[serde(rename = "aesgcm")]
    Aes256Gcm,
}

impl CipherAlgorithm {
    /// Get the human-readable name of the algorithm
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Caesar => "Caesar",
            Self::Otp => "One-Time Pad (XOR)",
            Self::Aes256Gcm => "AES-256-GCM",
        }
    }

    /// Whether the algorithm needs a key or password
    #[must_use]
    pub fn requires_key(&self) -> bool {
        matches!(self, Self::Otp | Self::Aes256Gcm)
    }

    /// Whether ciphertext may be shown as raw text
    ///
    /// AES output is binary and is never offered as text.
    #[must_use]
    pub fn supports_format(&self, format: OutputFormat) -> bool {
        !matches!((self, format), (Self::Aes256Gcm, OutputFormat::Text))
    }

    /// Format to use when the caller has no preference
    #[must_use]
    pub fn default_format(&self) -> OutputFormat {
        match self {
            Self::Caesar => OutputFormat::Text,
            Self::Otp | Self::Aes256Gcm => OutputFormat::Base64,
        }
    }

    /// Get all algorithms
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Caesar, Self::Otp, Self::Aes256Gcm]
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "caesar" | "shift" => Ok(Self::Caesar),
            "otp" | "xor" | "one-time-pad" => Ok(Self::Otp),
            "aes" | "aesgcm" | "aes-gcm" | "aes256gcm" | "aes-256-gcm" => Ok(Self::Aes256Gcm),
            other => Err(CipherError::validation(format!("unsupported algorithm '{other}'"))),
        }
    }
}
