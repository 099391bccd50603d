//! AES decryption operations

use super::builder_types::{AesWithPassword, AesWithPasswordAndHandler};
use crate::cipher::aead;
use crate::{CipherError, CipherResult};
use cipherlab_common::{LoggingTransformer, NotResult};

impl AesWithPassword {
    /// Open an envelope and return the plaintext bytes
    ///
    /// Authentication failures of every kind resolve to
    /// `CipherError::DecryptionFailed`. An empty password fails immediately
    /// without touching the blocking pool.
    pub fn decrypt<T: Into<Vec<u8>>>(self, envelope: T) -> CipherResult {
        if self.password.is_empty() {
            return CipherResult::error(CipherError::validation("password must not be empty"));
        }
        let envelope = envelope.into();
        let password = self.password;
        let fingerprint = LoggingTransformer::fingerprint(&envelope);
        tracing::debug!(
            envelope = %fingerprint,
            envelope_len = envelope.len(),
            "AES-GCM decrypt"
        );

        CipherResult::spawn_blocking(move || {
            let result = aead::open(&password, &envelope);
            if let Err(CipherError::DecryptionFailed) = &result {
                tracing::warn!(envelope = %fingerprint, "AES-GCM authentication failed");
            }
            result
        })
    }
}

impl<F, T> AesWithPasswordAndHandler<F>
where
    F: FnOnce(crate::Result<Vec<u8>>) -> T + Send + Unpin + 'static,
    T: NotResult,
{
    /// Decrypt and pass the result through the handler
    pub async fn decrypt<D: Into<Vec<u8>>>(self, envelope: D) -> T {
        let handler = self.result_handler;
        AesWithPassword {
            password: self.password,
        }
        .decrypt(envelope)
        .on_result(handler)
        .await
    }
}
