//! Byte output with encoding helpers

use cipherlab_common::codec;
use cipherlab_common::OutputFormat;

/// Cipher output bytes that know how to render themselves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodableResult {
    data: Vec<u8>,
}

impl EncodableResult {
    /// Create a new encodable result
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Convert to base64 encoded string
    #[must_use]
    pub fn to_base64(&self) -> String {
        codec::bytes_to_base64(&self.data)
    }

    /// Convert to lowercase hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        codec::bytes_to_hex(&self.data)
    }

    /// Interpret the bytes as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::Decode` if the bytes are not valid UTF-8.
    pub fn to_text(&self) -> cipherlab_common::Result<String> {
        codec::bytes_to_text(&self.data)
    }

    /// Text with invalid sequences replaced, for display only
    #[must_use]
    pub fn to_text_lossy(&self) -> String {
        codec::bytes_to_text_lossy(&self.data)
    }

    /// Render in the given output format
    ///
    /// # Errors
    ///
    /// Fails only for `OutputFormat::Text` on non-UTF-8 bytes.
    pub fn encode(&self, format: OutputFormat) -> cipherlab_common::Result<String> {
        format.encode(&self.data)
    }

    /// Borrow the raw bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the raw bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Get the length of the data
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for EncodableResult {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for EncodableResult {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<EncodableResult> for Vec<u8> {
    fn from(result: EncodableResult) -> Self {
        result.data
    }
}
