use cipherlab_cipher::{CipherAlgorithm, CipherError};
use cipherlab_common::OutputFormat;

#[test]
fn test_algorithm_parsing() {
    assert_eq!("caesar".parse::<CipherAlgorithm>().ok(), Some(CipherAlgorithm::Caesar));
    assert_eq!(" XOR ".parse::<CipherAlgorithm>().ok(), Some(CipherAlgorithm::Otp));
    assert_eq!(
        "AES-256-GCM".parse::<CipherAlgorithm>().ok(),
        Some(CipherAlgorithm::Aes256Gcm)
    );
    assert!(matches!(
        "rot13".parse::<CipherAlgorithm>(),
        Err(CipherError::Validation(_))
    ));
}

#[test]
fn test_algorithm_serde_names() {
    let json = serde_json::to_string(CipherAlgorithm::all()).expect("serialize");
    assert_eq!(json, r#"["caesar","otp","aesgcm"]"#);

    let parsed: CipherAlgorithm = serde_json::from_str(r#""aesgcm""#).expect("deserialize");
    assert_eq!(parsed, CipherAlgorithm::Aes256Gcm);
}

#[test]
fn test_algorithm_metadata() {
    assert!(!CipherAlgorithm::Caesar.requires_key());
    assert!(CipherAlgorithm::Otp.requires_key());
    assert!(CipherAlgorithm::Aes256Gcm.requires_key());

    assert!(!CipherAlgorithm::Aes256Gcm.supports_format(OutputFormat::Text));
    assert!(CipherAlgorithm::Otp.supports_format(OutputFormat::Text));
    assert_eq!(CipherAlgorithm::Caesar.default_format(), OutputFormat::Text);
    assert_eq!(CipherAlgorithm::Aes256Gcm.default_format(), OutputFormat::Base64);
    assert_eq!(CipherAlgorithm::Aes256Gcm.to_string(), "AES-256-GCM");
}
