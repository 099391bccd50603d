//! # cipherlab - Educational Cryptography Toolkit
//!
//! Classical ciphers, password-based AES-256-GCM and letter-frequency
//! analysis, with one entry point that turns a request into a result string
//! or a classified error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cipherlab::{CipherFacade, CipherRequest, Direction, OutputFormat};
//!
//! # #[tokio::main]
//! # async fn main() -> cipherlab::Result<()> {
//! let request = CipherRequest::aes(Direction::Encrypt, "attack at dawn", "hunter2")
//!     .with_output_format(OutputFormat::Hex);
//! let envelope = CipherFacade::execute(&request).await?;
//!
//! let request = CipherRequest::aes(Direction::Decrypt, envelope, "hunter2")
//!     .with_output_format(OutputFormat::Hex);
//! assert_eq!(CipherFacade::execute(&request).await?, "attack at dawn");
//! # Ok(())
//! # }
//! ```
//!
//! The component builders stay available for callers that want bytes
//! instead of strings:
//!
//! ```rust,no_run
//! use cipherlab::Cipherlab;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), cipherlab::CipherError> {
//! let envelope = Cipherlab::cipher()
//!     .aes()
//!     .with_password("hunter2")
//!     .on_result(|result| match result {
//!         Ok(envelope) => envelope,
//!         Err(e) => {
//!             tracing::error!("Encryption error: {e}");
//!             Vec::new()
//!         }
//!     })
//!     .encrypt("attack at dawn")
//!     .await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod facade;
mod master;
pub mod request;

pub use facade::CipherFacade;
pub use master::{CipherMasterBuilder, Cipherlab};
pub use request::{CipherRequest, Direction};

// === Common Re-exports ===

pub use cipherlab_common::codec;
pub use cipherlab_common::{
    on_error, on_result, Encoding, Error, ErrorKind, LoggingTransformer, OutputFormat, Result,
};

// === Component Re-exports ===

pub use cipherlab_cipher::{Cipher, CipherAlgorithm, CipherError, EncodableResult, Envelope};

pub use cipherlab_analysis::{
    analyze, AnalysisConfig, ChartRow, FrequencyTable, Sampling, Symbol,
};
