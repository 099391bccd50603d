//! Error handling with context propagation
//!
//! - `ErrorKind` is the user-facing taxonomy every package maps into
//! - `Error` carries a kind, an optional context message and source chain
//! - `LoggingTransformer` wires `env_logger` and safe crypto logging

pub mod constructors;
pub mod logging;
pub mod macros;
pub mod types;

pub use logging::LoggingTransformer;
pub use types::{Error, ErrorKind, Result};
