//! Key derivation parameters
//!
//! The AES-GCM envelope format fixes these values, so they are protocol
//! constants rather than user settings. Changing any of them breaks every
//! envelope produced before.

/// PBKDF2 iteration count baked into the envelope protocol
pub const PBKDF2_ITERATIONS: u32 = 100_000;
/// Salt length in bytes
pub const SALT_LEN: usize = 16;
/// Derived key length in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// Parameters for a PBKDF2-HMAC-SHA256 derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfConfig {
    /// PBKDF2 iteration count
    pub iterations: u32,
    /// Required salt size in bytes
    pub salt_size: usize,
    /// Output key size in bytes
    pub output_size: usize,
}

impl KdfConfig {
    /// The fixed parameters of the AES-GCM envelope protocol
    #[must_use]
    pub fn protocol() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
            salt_size: SALT_LEN,
            output_size: KEY_LEN,
        }
    }
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self::protocol()
    }
}
