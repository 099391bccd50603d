//! Password-based AES-256-GCM
//!
//! Blocking primitives behind the async builder API. A fresh salt and
//! nonce are drawn for every seal, so sealing the same plaintext twice
//! never yields the same envelope.

use super::envelope::{Envelope, NONCE_LEN};
use crate::{CipherError, Result};
use aes_gcm::{
    aead::{generic_array::GenericArray, Aead},
    Aes256Gcm, KeyInit,
};
use cipherlab_key::{entropy::random_array, KeyDerivation, SALT_LEN};
use zeroize::Zeroizing;

/// Encrypt `plaintext` under `password` into an envelope
///
/// # Errors
///
/// Returns `CipherError::Validation` if the password or plaintext is empty.
/// Key derivation or provider failures surface as internal errors.
pub fn seal(password: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    if password.is_empty() {
        return Err(CipherError::validation("password must not be empty"));
    }
    if plaintext.is_empty() {
        return Err(CipherError::validation("plaintext must not be empty"));
    }

    let salt: [u8; SALT_LEN] = random_array();
    let nonce: [u8; NONCE_LEN] = random_array();
    let cipher = cipher_for(password, &salt)?;

    let sealed = cipher
        .encrypt(GenericArray::from_slice(&nonce), plaintext)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    Ok(Envelope {
        salt,
        nonce,
        sealed,
    }
    .to_bytes())
}

/// Decrypt and authenticate an envelope
///
/// # Errors
///
/// - `CipherError::Validation` if the password is empty
/// - `CipherError::MalformedEnvelope` if the buffer is shorter than 28 bytes
/// - `CipherError::DecryptionFailed` for any authentication failure
pub fn open(password: &[u8], envelope: &[u8]) -> Result<Vec<u8>> {
    if password.is_empty() {
        return Err(CipherError::validation("password must not be empty"));
    }
    let envelope = Envelope::parse(envelope)?;
    let cipher = cipher_for(password, &envelope.salt)?;

    cipher
        .decrypt(
            GenericArray::from_slice(&envelope.nonce),
            envelope.sealed.as_slice(),
        )
        .map_err(|_| CipherError::DecryptionFailed)
}

fn cipher_for(password: &[u8], salt: &[u8; SALT_LEN]) -> Result<Aes256Gcm> {
    let key: Zeroizing<Vec<u8>> = KeyDerivation::protocol()
        .with_salt(salt.to_vec())
        .derive_key(password)?;
    Aes256Gcm::new_from_slice(&key)
        .map_err(|e| CipherError::Internal(format!("derived key rejected: {e}")))
}
