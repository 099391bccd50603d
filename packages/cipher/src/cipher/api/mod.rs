//! Fluent cipher API
//!
//! Usage: `Cipher::aes().with_password(pw).encrypt(data).await`

pub mod aes_builder;
pub mod caesar_builder;
mod cipher;
pub mod xor_builder;

pub use aes_builder::{AesBuilder, AesWithPassword, AesWithPasswordAndHandler};
pub use caesar_builder::{CaesarBuilder, CaesarWithShift};
pub use cipher::Cipher;
pub use xor_builder::{XorBuilder, XorWithKey};
