//! Caesar builder
//!
//! The builder is where user input meets the transform, so the shift is
//! validated here and [`caesar`](fn@crate::cipher::classical::caesar) itself
//! accepts any value.

use crate::cipher::classical::{caesar, validate_shift};
use crate::{CipherError, Result};

/// Initial Caesar builder
pub struct CaesarBuilder;

/// Caesar builder with a shift
#[derive(Debug, Clone, Copy)]
pub struct CaesarWithShift {
    shift: i64,
}

impl Default for CaesarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CaesarBuilder {
    /// Create new Caesar builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the shift; checked against `1..=25` when the cipher runs
    #[must_use]
    pub fn with_shift(self, shift: i64) -> CaesarWithShift {
        CaesarWithShift { shift }
    }
}

impl CaesarWithShift {
    /// Shift letters forward
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Validation` if the shift is outside `1..=25`.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        self.apply(text, true)
    }

    /// Shift letters back
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Validation` if the shift is outside `1..=25`.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        self.apply(text, false)
    }

    /// Byte-level form of [`encrypt`](Self::encrypt)/[`decrypt`](Self::decrypt)
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Validation` if the shift is outside `1..=25`.
    pub fn apply_bytes(&self, bytes: &[u8], encrypt: bool) -> Result<Vec<u8>> {
        let shift = validate_shift(self.shift)?;
        Ok(caesar(bytes, shift, encrypt))
    }

    fn apply(&self, text: &str, encrypt: bool) -> Result<String> {
        let shifted = self.apply_bytes(text.as_bytes(), encrypt)?;
        // Only ASCII letters moved, so UTF-8 validity is preserved
        String::from_utf8(shifted)
            .map_err(|e| CipherError::Internal(format!("caesar broke UTF-8: {e}")))
    }
}
