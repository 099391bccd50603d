//! AES-256-GCM builder split into type definitions and operations

mod builder_types;
mod decrypt_operations;
mod encrypt_operations;

pub use builder_types::{AesBuilder, AesWithPassword, AesWithPasswordAndHandler};
