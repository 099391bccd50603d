//! Caesar shift over ASCII letters

use crate::{CipherError, Result};

/// Smallest shift a caller may request
pub const MIN_SHIFT: i64 = 1;
/// Largest shift a caller may request
pub const MAX_SHIFT: i64 = 25;

const ALPHABET_LEN: i64 = 26;

/// Check a user-supplied shift before it reaches [`caesar`]
///
/// # Errors
///
/// Returns `CipherError::Validation` unless `shift` is in `1..=25`.
pub fn validate_shift(shift: i64) -> Result<i64> {
    if (MIN_SHIFT..=MAX_SHIFT).contains(&shift) {
        Ok(shift)
    } else {
        Err(CipherError::validation(format!(
            "shift must be between {MIN_SHIFT} and {MAX_SHIFT}, got {shift}"
        )))
    }
}

/// Normalize a signed shift into `0..26` for the given direction
///
/// The shift is reduced before decryption takes its complement, so the
/// same nominal shift undoes itself for every `i64`, `i64::MIN` included.
#[must_use]
pub fn effective_shift(shift: i64, encrypt: bool) -> u8 {
    // rem_euclid is always in 0..26
    let k = shift.rem_euclid(ALPHABET_LEN) as u8;
    if encrypt {
        k
    } else {
        (26 - k) % 26
    }
}

/// Rotate ASCII letters by `shift`, leaving every other byte untouched
///
/// Upper and lower case rotate in separate rings, so case is preserved and
/// the output has exactly the input's length.
#[must_use]
pub fn caesar(bytes: &[u8], shift: i64, encrypt: bool) -> Vec<u8> {
    let k = effective_shift(shift, encrypt);
    bytes.iter().map(|&b| rotate(b, k)).collect()
}

#[inline]
fn rotate(byte: u8, k: u8) -> u8 {
    match byte {
        b'A'..=b'Z' => b'A' + (byte - b'A' + k) % 26,
        b'a'..=b'z' => b'a' + (byte - b'a' + k) % 26,
        _ => byte,
    }
}
