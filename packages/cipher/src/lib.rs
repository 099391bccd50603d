//! # cipherlab ciphers
//!
//! The ciphers of the cipherlab teaching toolkit:
//!
//! - **Caesar**: letter rotation, case preserving
//! - **XOR / "one-time pad"**: repeating-key XOR, deliberately the textbook
//!   insecure variant
//! - **AES-256-GCM**: authenticated encryption under a PBKDF2-derived key,
//!   framed as a self-describing `salt || nonce || ciphertext||tag` envelope
//!
//! ```rust,no_run
//! use cipherlab_cipher::Cipher;
//!
//! # #[tokio::main]
//! # async fn main() -> cipherlab_cipher::Result<()> {
//! let envelope = Cipher::aes().with_password("hunter2").encrypt("attack at dawn").await?;
//! let plaintext = Cipher::aes().with_password("hunter2").decrypt(envelope).await?;
//! assert_eq!(plaintext, b"attack at dawn");
//!
//! let shifted = Cipher::caesar().with_shift(3).encrypt("Hello, World!")?;
//! assert_eq!(shifted, "Khoor, Zruog!");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Cipher primitives, envelope framing and builders
pub mod cipher;
mod cipher_result;
pub mod error;

pub use cipher_result::{CipherResult, CipherResultWithHandler};
pub use error::{CipherError, Result};

pub use cipher::api::{
    AesBuilder, AesWithPassword, AesWithPasswordAndHandler, CaesarBuilder, CaesarWithShift,
    Cipher, XorBuilder, XorWithKey,
};
pub use cipher::{CipherAlgorithm, EncodableResult, Envelope};

pub use cipherlab_common::{on_error, on_result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Cipher, CipherAlgorithm, CipherError, EncodableResult, Result};
}
