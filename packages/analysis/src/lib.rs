//! Letter-frequency analysis
//!
//! Counts letters in a text, optionally sampling every k-th character so
//! the columns of a polyalphabetic ciphertext can be studied one at a time.
//!
//! ```rust
//! use cipherlab_analysis::{analyze, AnalysisConfig, Symbol};
//!
//! let table = analyze("Hello World", &AnalysisConfig::default());
//! assert_eq!(table.get(Symbol::Letter('L')), 3);
//! assert_eq!(table.total(), 10);
//! ```

#![forbid(unsafe_code)]

mod analyzer;
pub mod config;
pub mod table;

pub use analyzer::analyze;
pub use config::{AnalysisConfig, Sampling};
pub use table::{ChartRow, FrequencyTable, Symbol};
