//! The AES-GCM envelope wire format
//!
//! ```text
//! +-----------+------------+-----------------------------+
//! | salt (16) | nonce (12) | ciphertext || tag (N + 16)  |
//! +-----------+------------+-----------------------------+
//! ```
//!
//! The layout is self-describing: the password is the only other input a
//! recipient needs. Field order and lengths are a compatibility contract.

use crate::{CipherError, Result};
use cipherlab_key::SALT_LEN;

/// AES-GCM nonce length in bytes
pub const NONCE_LEN: usize = 12;
/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;
/// Length of the salt and nonce prefix; shorter buffers are malformed
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;
/// Bytes an envelope adds on top of the plaintext
pub const ENVELOPE_OVERHEAD: usize = HEADER_LEN + TAG_LEN;

/// A parsed envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// PBKDF2 salt
    pub salt: [u8; SALT_LEN],
    /// AES-GCM nonce
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext with the tag appended, opaque to the framing layer
    pub sealed: Vec<u8>,
}

impl Envelope {
    /// Split a buffer into salt, nonce and sealed payload
    ///
    /// Only the header length is checked here. A buffer of exactly
    /// `HEADER_LEN` bytes parses, and fails later at authentication.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedEnvelope` if `bytes` is shorter than
    /// `HEADER_LEN`.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(CipherError::MalformedEnvelope {
                minimum: HEADER_LEN,
                actual: bytes.len(),
            });
        }
        let (salt, rest) = bytes.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);

        let mut envelope = Self {
            salt: [0u8; SALT_LEN],
            nonce: [0u8; NONCE_LEN],
            sealed: sealed.to_vec(),
        };
        envelope.salt.copy_from_slice(salt);
        envelope.nonce.copy_from_slice(nonce);
        Ok(envelope)
    }

    /// Serialize as `salt || nonce || sealed`
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.sealed.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.sealed);
        out
    }
}
