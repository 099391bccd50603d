//! Master builders
//!
//! `Cipherlab::cipher().aes()` and friends, forwarding to the component
//! crates.

mod cipher;
mod core;

pub use self::cipher::CipherMasterBuilder;
pub use self::core::Cipherlab;
