//! Password-based key derivation (PBKDF2-HMAC-SHA256)

pub mod config;
pub mod derivation;

pub use config::{KdfConfig, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use derivation::KeyDerivation;
