//! # cipherlab key material
//!
//! Password-based key derivation and secure random bytes for the AES-GCM
//! envelope.
//!
//! ```rust,no_run
//! use cipherlab_key::{KeyDerivation, entropy::random_array};
//!
//! let salt: [u8; 16] = random_array();
//! let key = KeyDerivation::protocol()
//!     .with_salt(salt.to_vec())
//!     .derive_key(b"hunter2")?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), cipherlab_key::KeyError>(())
//! ```

#![forbid(unsafe_code)]

pub mod derive;
pub mod entropy;
pub mod error;

pub use derive::{KdfConfig, KeyDerivation, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use error::{KeyError, Result};
