pub mod aead;
mod algorithm;
pub mod api;
pub mod classical;
pub mod encryption_result;
pub mod envelope;

pub use self::algorithm::CipherAlgorithm;
pub use encryption_result::EncodableResult;
pub use envelope::{Envelope, ENVELOPE_OVERHEAD, HEADER_LEN, NONCE_LEN, TAG_LEN};
