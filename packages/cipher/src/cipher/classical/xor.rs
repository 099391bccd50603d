//! Repeating-key XOR, the textbook "one-time pad"
//!
//! A real one-time pad needs a key at least as long as the message and
//! never reused. This transform cycles a short key instead, which is what
//! the toolkit demonstrates: the security claim collapses as soon as the
//! key repeats. Use [`is_true_one_time_pad`] to tell users when that
//! happens.

use crate::{CipherError, Result};

/// XOR `data` with `key`, repeating the key as needed
///
/// XOR is its own inverse, so the same call encrypts and decrypts.
///
/// # Errors
///
/// Returns `CipherError::Validation` if `key` is empty.
pub fn xor_stream(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::validation("XOR key must not be empty"));
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect())
}

/// Whether a key of `key_len` bytes covers `data_len` bytes without repeating
#[must_use]
pub fn is_true_one_time_pad(data_len: usize, key_len: usize) -> bool {
    key_len > 0 && key_len >= data_len
}
