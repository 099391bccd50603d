//! One entry point from request to result string
//!
//! Every failure comes back as a [`cipherlab_common::Error`] whose kind a
//! UI can show directly. Operations are all-or-nothing: an error means no
//! partial output.

use crate::request::{CipherRequest, Direction};
use cipherlab_analysis::{AnalysisConfig, FrequencyTable};
use cipherlab_cipher::cipher::classical::validate_shift;
use cipherlab_cipher::{Cipher, CipherAlgorithm};
use cipherlab_common::codec::bytes_to_text;
use cipherlab_common::{ensure, on_error, ErrorKind, LoggingTransformer, OutputFormat, Result};
use std::time::Instant;

/// Dispatches requests to the ciphers and normalizes their errors
pub struct CipherFacade;

impl CipherFacade {
    /// Run a cipher request
    ///
    /// Encrypt renders the ciphertext in the request's output format.
    /// Decrypt parses the payload from that format and returns plain text.
    ///
    /// # Errors
    ///
    /// - `Validation`: empty payload, missing key, shift outside `1..=25`,
    ///   or `Text` output requested for AES-GCM
    /// - `MalformedEncoding`: payload is not valid hex/base64
    /// - `Decode`: result is not valid UTF-8
    /// - `MalformedEnvelope` / `DecryptionFailed`: AES-GCM input rejected
    pub async fn execute(request: &CipherRequest) -> Result<String> {
        let started = Instant::now();
        let operation = format!("{} {}", request.algorithm.name(), request.direction);
        tracing::debug!(
            algorithm = %request.algorithm,
            direction = %request.direction,
            format = %request.output_format,
            payload_len = request.payload.len(),
            "executing cipher request"
        );

        let result = Self::dispatch(request).await.map_err(on_error);

        if let Err(e) = &result {
            if matches!(e.kind(), ErrorKind::Internal) {
                LoggingTransformer::log_crypto_error(&operation, e);
            }
        }
        LoggingTransformer::log_performance_metric(&operation, started.elapsed(), result.is_ok());
        result
    }

    /// Letter-frequency table of `text`
    #[must_use]
    pub fn analyze(text: &str, config: &AnalysisConfig) -> FrequencyTable {
        cipherlab_analysis::analyze(text, config)
    }

    async fn dispatch(request: &CipherRequest) -> Result<String> {
        ensure!(!request.payload.is_empty(), validation, "nothing to process");

        match request.algorithm {
            CipherAlgorithm::Caesar => Self::caesar(request),
            CipherAlgorithm::Otp => Self::otp(request),
            CipherAlgorithm::Aes256Gcm => Self::aes(request).await,
        }
    }

    fn caesar(request: &CipherRequest) -> Result<String> {
        validate_shift(request.shift)?;
        let caesar = Cipher::caesar().with_shift(request.shift);
        let format = request.output_format;

        match request.direction {
            Direction::Encrypt => {
                let shifted = caesar.apply_bytes(request.payload.as_bytes(), true)?;
                format.encode(&shifted)
            }
            Direction::Decrypt => {
                let ciphertext = format.decode(&request.payload)?;
                let plaintext = caesar.apply_bytes(&ciphertext, false)?;
                bytes_to_text(&plaintext)
            }
        }
    }

    fn otp(request: &CipherRequest) -> Result<String> {
        ensure!(!request.key.is_empty(), validation, "a key is required");
        let xor = Cipher::otp().with_key(request.key.as_bytes());
        let format = request.output_format;

        match request.direction {
            Direction::Encrypt => xor.apply(request.payload.as_bytes())?.encode(format),
            Direction::Decrypt => {
                let ciphertext = format.decode(&request.payload)?;
                xor.apply(ciphertext)?.to_text()
            }
        }
    }

    async fn aes(request: &CipherRequest) -> Result<String> {
        ensure!(!request.key.is_empty(), validation, "a password is required");
        ensure!(
            request.output_format != OutputFormat::Text,
            validation,
            "AES-GCM output is binary; choose hex or base64"
        );
        let aes = Cipher::aes().with_password(request.key.as_bytes());
        let format = request.output_format;

        match request.direction {
            Direction::Encrypt => {
                let envelope = aes.encrypt(request.payload.as_bytes()).await?;
                format.encode(&envelope)
            }
            Direction::Decrypt => {
                let envelope = format.decode(&request.payload)?;
                let plaintext = aes.decrypt(envelope).await?;
                bytes_to_text(&plaintext)
            }
        }
    }
}
