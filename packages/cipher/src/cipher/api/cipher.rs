//! Entry point for the fluent cipher API

use super::{aes_builder::AesBuilder, caesar_builder::CaesarBuilder, xor_builder::XorBuilder};

/// Entry point for cipher operations
pub struct Cipher;

impl Cipher {
    /// Password-based AES-256-GCM
    #[must_use]
    pub fn aes() -> AesBuilder {
        AesBuilder::new()
    }

    /// Caesar shift
    #[must_use]
    pub fn caesar() -> CaesarBuilder {
        CaesarBuilder::new()
    }

    /// Repeating-key XOR
    #[must_use]
    pub fn xor() -> XorBuilder {
        XorBuilder::new()
    }

    /// Repeating-key XOR under its teaching name
    #[must_use]
    pub fn otp() -> XorBuilder {
        XorBuilder::new()
    }
}
