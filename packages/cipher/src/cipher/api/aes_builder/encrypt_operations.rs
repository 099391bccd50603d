//! AES encryption operations

use super::builder_types::{AesWithPassword, AesWithPasswordAndHandler};
use crate::cipher::aead;
use crate::{CipherError, CipherResult};
use cipherlab_common::{LoggingTransformer, NotResult};

impl AesWithPassword {
    /// Seal `plaintext` into a `salt || nonce || ciphertext||tag` envelope
    ///
    /// The returned future resolves to the envelope bytes. An empty password
    /// fails immediately without touching the blocking pool.
    pub fn encrypt<T: Into<Vec<u8>>>(self, plaintext: T) -> CipherResult {
        if self.password.is_empty() {
            return CipherResult::error(CipherError::validation("password must not be empty"));
        }
        let plaintext = plaintext.into();
        let password = self.password;
        tracing::debug!(plaintext_len = plaintext.len(), "AES-GCM encrypt");

        CipherResult::spawn_blocking(move || {
            let envelope = aead::seal(&password, &plaintext)?;
            tracing::debug!(
                envelope = %LoggingTransformer::fingerprint(&envelope),
                envelope_len = envelope.len(),
                "AES-GCM envelope sealed"
            );
            Ok(envelope)
        })
    }
}

impl<F, T> AesWithPasswordAndHandler<F>
where
    F: FnOnce(crate::Result<Vec<u8>>) -> T + Send + Unpin + 'static,
    T: NotResult,
{
    /// Encrypt and pass the result through the handler
    pub async fn encrypt<D: Into<Vec<u8>>>(self, plaintext: D) -> T {
        let handler = self.result_handler;
        AesWithPassword {
            password: self.password,
        }
        .encrypt(plaintext)
        .on_result(handler)
        .await
    }
}
