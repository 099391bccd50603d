//! Cipher Master Builder

use cipherlab_cipher::{AesBuilder, CaesarBuilder, Cipher, XorBuilder};

/// Master builder for cipher operations
pub struct CipherMasterBuilder;

impl CipherMasterBuilder {
    /// Use password-based AES-256-GCM
    #[must_use]
    pub fn aes(self) -> AesBuilder {
        Cipher::aes()
    }

    /// Use the Caesar shift
    #[must_use]
    pub fn caesar(self) -> CaesarBuilder {
        Cipher::caesar()
    }

    /// Use repeating-key XOR
    #[must_use]
    pub fn otp(self) -> XorBuilder {
        Cipher::otp()
    }
}
