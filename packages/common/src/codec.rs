//! Conversions between raw bytes and text, hex and base64
//!
//! Every cipher output has to survive a plain-text field, so all string
//! handling lives here and the ciphers only ever see bytes. Decoding is
//! strict: bad input is an error, never a silently patched buffer.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary-to-text encodings understood by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// Lowercase hexadecimal, two characters per byte
    Hex,
    /// Standard base64 alphabet with padding
    Base64,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
            Self::Base64 => f.write_str("base64"),
        }
    }
}

/// UTF-8 encode text. Never fails.
#[must_use]
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes into text
///
/// # Errors
///
/// Returns `ErrorKind::Decode` if the bytes are not valid UTF-8.
pub fn bytes_to_text(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| Error::with_source(crate::ErrorKind::Decode, e))
}

/// Decode bytes for display only, replacing invalid sequences
///
/// Not for decrypted plaintext; use [`bytes_to_text`] there.
#[must_use]
pub fn bytes_to_text_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Lowercase hex encoding
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string
///
/// # Errors
///
/// Returns `ErrorKind::MalformedEncoding(Encoding::Hex)` on odd length or
/// any non-hex-digit character.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| {
        tracing::debug!(len = text.len(), "rejected hex input: {e}");
        Error::with_source(crate::ErrorKind::MalformedEncoding(Encoding::Hex), e)
    })
}

/// Standard base64 with padding
#[must_use]
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard, padded base64 string
///
/// # Errors
///
/// Returns `ErrorKind::MalformedEncoding(Encoding::Base64)` on characters
/// outside the alphabet or bad padding.
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(|e| {
        tracing::debug!(len = text.len(), "rejected base64 input: {e}");
        Error::with_source(crate::ErrorKind::MalformedEncoding(Encoding::Base64), e)
    })
}

/// How cipher bytes are presented as a string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raw UTF-8 text; only works when the bytes happen to be valid UTF-8
    Text,
    /// Lowercase hexadecimal
    Hex,
    /// Standard base64
    #[default]
    Base64,
}

impl OutputFormat {
    /// Render bytes in this format
    ///
    /// # Errors
    ///
    /// `Text` fails with `ErrorKind::Decode` when the bytes are not UTF-8.
    /// `Hex` and `Base64` never fail.
    pub fn encode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Text => bytes_to_text(bytes),
            Self::Hex => Ok(bytes_to_hex(bytes)),
            Self::Base64 => Ok(bytes_to_base64(bytes)),
        }
    }

    /// Parse a string rendered in this format back into bytes
    ///
    /// # Errors
    ///
    /// `Hex` and `Base64` fail with `ErrorKind::MalformedEncoding` on bad
    /// input. `Text` never fails.
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Text => Ok(text_to_bytes(text)),
            Self::Hex => hex_to_bytes(text),
            Self::Base64 => base64_to_bytes(text),
        }
    }

    /// The binary-to-text encoding behind this format, if any
    #[must_use]
    pub fn encoding(self) -> Option<Encoding> {
        match self {
            Self::Text => None,
            Self::Hex => Some(Encoding::Hex),
            Self::Base64 => Some(Encoding::Base64),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Hex => f.write_str("hex"),
            Self::Base64 => f.write_str("base64"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "utf8" | "utf-8" => Ok(Self::Text),
            "hex" | "hexadecimal" => Ok(Self::Hex),
            "base64" | "b64" => Ok(Self::Base64),
            other => Err(Error::validation().context(format!("unknown output format '{other}'"))),
        }
    }
}
