//! Structured logging setup
//!
//! Library code emits `tracing` events. With the `log` feature of `tracing`
//! those events reach the `log` facade, and this module installs
//! `env_logger` as the backend. Passwords, keys and plaintext never go
//! through here; at most a truncated SHA-256 fingerprint does.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging once at application startup
    ///
    /// Levels come from `RUST_LOG`, for example
    /// `RUST_LOG=cipherlab_cipher=debug,cipherlab=info`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            let initialized = env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init();
            if initialized.is_ok() {
                info!("cipherlab logging initialized");
            }
        });
    }

    /// Initialize logging for tests; safe to call from every test
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed cryptographic operation without exposing its inputs
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name_of_val(error)
        );
    }

    /// Log how long an operation took
    pub fn log_performance_metric(operation: &str, elapsed: Duration, success: bool) {
        let millis = elapsed.as_millis();
        if success {
            debug!("Performance: {operation} completed in {millis}ms");
        } else {
            warn!("Performance: {operation} failed after {millis}ms");
        }
    }

    /// Short fingerprint of a byte string, e.g. an envelope, for correlating log lines
    ///
    /// First 12 hex chars of SHA-256, prefixed with `#`.
    #[must_use]
    pub fn fingerprint(secret: &[u8]) -> String {
        let hash = Sha256::digest(secret);
        let hex_hash = hex::encode(hash);
        format!("#{}", &hex_hash[..12])
    }
}
