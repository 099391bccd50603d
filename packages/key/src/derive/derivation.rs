//! Core key derivation
//!
//! `KeyDerivation` holds a salt and turns a password into key bytes.
//! Salt and output are zeroized when dropped.

use super::config::KdfConfig;
use crate::{KeyError, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use std::num::NonZeroU32;
use std::time::Instant;
use zeroize::Zeroizing;

/// Key derivation context
pub struct KeyDerivation {
    config: KdfConfig,
    salt: Option<Zeroizing<Vec<u8>>>,
}

impl KeyDerivation {
    /// Create a new key derivation context
    #[must_use]
    pub fn new(config: KdfConfig) -> Self {
        Self { config, salt: None }
    }

    /// Context with the envelope protocol parameters
    #[must_use]
    pub fn protocol() -> Self {
        Self::new(KdfConfig::protocol())
    }

    /// Use an existing salt, e.g. one read back from an envelope
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = Some(Zeroizing::new(salt.into()));
        self
    }

    /// Derive key bytes from a password
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no salt was set
    /// - the salt length does not match the configuration
    /// - the iteration count or output size is zero
    pub fn derive_key(&self, password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let salt = self.salt.as_ref().ok_or(KeyError::MissingSalt)?;
        if salt.len() != self.config.salt_size {
            return Err(KeyError::InvalidSaltLength {
                expected: self.config.salt_size,
                actual: salt.len(),
            });
        }
        if self.config.output_size == 0 {
            return Err(KeyError::invalid_parameters("output size must be non-zero"));
        }

        let iterations = NonZeroU32::new(self.config.iterations)
            .ok_or_else(|| KeyError::invalid_parameters("PBKDF2 iterations must be non-zero"))?;

        let started = Instant::now();
        let mut key = Zeroizing::new(vec![0u8; self.config.output_size]);
        pbkdf2_hmac::<Sha256>(password, salt, iterations.get(), &mut key);
        tracing::trace!(
            iterations = self.config.iterations,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "derived key"
        );
        Ok(key)
    }
}

impl Default for KeyDerivation {
    fn default() -> Self {
        Self::protocol()
    }
}
