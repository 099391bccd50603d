//! Common infrastructure shared by the cipherlab crates
//!
//! This crate provides:
//! - The byte/text/hex/base64 codec every cipher goes through
//! - The user-facing error taxonomy with context propagation
//! - `env_logger` based logging setup
//! - Result handler conventions used by the builder APIs

#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod handlers;
#[doc(hidden)]
pub mod macros;
pub mod traits;

pub use codec::{Encoding, OutputFormat};
pub use error::*;
pub use handlers::{on_error, on_result};
pub use traits::NotResult;
