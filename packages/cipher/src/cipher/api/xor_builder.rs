//! XOR builder

use crate::cipher::classical::{is_true_one_time_pad, xor_stream};
use crate::cipher::EncodableResult;
use crate::Result;
use zeroize::Zeroizing;

/// Initial XOR builder
pub struct XorBuilder;

/// XOR builder with a key
pub struct XorWithKey {
    key: Zeroizing<Vec<u8>>,
}

impl Default for XorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl XorBuilder {
    /// Create new XOR builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the key stream; it repeats when shorter than the data
    #[must_use]
    pub fn with_key<T: Into<Vec<u8>>>(self, key: T) -> XorWithKey {
        XorWithKey {
            key: Zeroizing::new(key.into()),
        }
    }
}

impl XorWithKey {
    /// XOR the data with the key. Encrypts and decrypts alike.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Validation` if the key is empty.
    pub fn apply<T: AsRef<[u8]>>(&self, data: T) -> Result<EncodableResult> {
        let data = data.as_ref();
        if !is_true_one_time_pad(data.len(), self.key.len()) {
            tracing::debug!(
                data_len = data.len(),
                key_len = self.key.len(),
                "XOR key repeats; not a true one-time pad"
            );
        }
        xor_stream(data, &self.key).map(EncodableResult::from)
    }

    /// Whether this key covers `data_len` bytes without repeating
    #[must_use]
    pub fn covers(&self, data_len: usize) -> bool {
        is_true_one_time_pad(data_len, self.key.len())
    }
}
