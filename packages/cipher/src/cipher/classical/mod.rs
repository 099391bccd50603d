//! Classical ciphers: Caesar shift and repeating-key XOR
//!
//! Both are pure byte transforms with no randomness and no state.

pub mod caesar;
pub mod xor;

pub use caesar::{caesar, effective_shift, validate_shift, MAX_SHIFT, MIN_SHIFT};
pub use xor::{is_true_one_time_pad, xor_stream};
