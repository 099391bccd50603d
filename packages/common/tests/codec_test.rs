//! Codec conversions: strict decoding and lossless round trips

use cipherlab_common::codec::{
    base64_to_bytes, bytes_to_base64, bytes_to_hex, bytes_to_text, bytes_to_text_lossy,
    hex_to_bytes, text_to_bytes,
};
use cipherlab_common::{Encoding, ErrorKind, OutputFormat};
use proptest::prelude::*;

#[test]
fn test_hex_is_lowercase_two_chars_per_byte() {
    assert_eq!(bytes_to_hex(&[0x00, 0xAB, 0xff, 0x10]), "00abff10");
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn test_hex_accepts_uppercase_digits() {
    assert_eq!(hex_to_bytes("ABcd").expect("valid hex"), vec![0xab, 0xcd]);
}

#[test]
fn test_odd_length_hex_is_malformed() {
    let err = hex_to_bytes("abc").expect_err("odd length must fail");
    assert_eq!(err.kind(), &ErrorKind::MalformedEncoding(Encoding::Hex));
}

#[test]
fn test_non_hex_digit_is_malformed() {
    let err = hex_to_bytes("zz").expect_err("non-hex must fail");
    assert_eq!(err.kind(), &ErrorKind::MalformedEncoding(Encoding::Hex));
}

#[test]
fn test_invalid_base64_is_malformed() {
    let err = base64_to_bytes("not base64!").expect_err("invalid alphabet must fail");
    assert_eq!(err.kind(), &ErrorKind::MalformedEncoding(Encoding::Base64));
    assert!(err.to_string().contains("base64"));
}

#[test]
fn test_base64_requires_padding() {
    assert_eq!(bytes_to_base64(b"hi"), "aGk=");
    assert_eq!(base64_to_bytes("aGk=").expect("padded"), b"hi".to_vec());
    let err = base64_to_bytes("aGk").expect_err("missing padding must fail");
    assert_eq!(err.kind(), &ErrorKind::MalformedEncoding(Encoding::Base64));
}

#[test]
fn test_base64_is_not_url_safe() {
    // 0xfb 0xff encodes to "+/8=" in the standard alphabet
    assert_eq!(bytes_to_base64(&[0xfb, 0xff]), "+/8=");
    assert!(base64_to_bytes("-_8=").is_err());
}

#[test]
fn test_invalid_utf8_is_decode_error_not_replacement() {
    let bytes = [0x66, 0x6f, 0xff, 0x6f];
    let err = bytes_to_text(&bytes).expect_err("invalid UTF-8 must fail");
    assert_eq!(err.kind(), &ErrorKind::Decode);

    // The lossy path exists for display only
    assert_eq!(bytes_to_text_lossy(&bytes), "fo\u{FFFD}o");
}

#[test]
fn test_text_round_trip_preserves_multibyte() {
    let text = "héllo, wörld ✓";
    assert_eq!(bytes_to_text(&text_to_bytes(text)).expect("utf8"), text);
}

#[test]
fn test_output_format_dispatch() {
    let bytes = b"Hi";
    assert_eq!(OutputFormat::Text.encode(bytes).expect("text"), "Hi");
    assert_eq!(OutputFormat::Hex.encode(bytes).expect("hex"), "4869");
    assert_eq!(OutputFormat::Base64.encode(bytes).expect("b64"), "SGk=");

    assert_eq!(OutputFormat::Hex.decode("4869").expect("hex"), bytes.to_vec());
    assert_eq!(OutputFormat::Base64.decode("SGk=").expect("b64"), bytes.to_vec());
    assert_eq!(OutputFormat::Text.decode("Hi").expect("text"), bytes.to_vec());
}

#[test]
fn test_output_format_text_rejects_binary() {
    let err = OutputFormat::Text.encode(&[0xc3]).expect_err("lone lead byte");
    assert_eq!(err.kind(), &ErrorKind::Decode);
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("HEX".parse::<OutputFormat>().expect("hex"), OutputFormat::Hex);
    assert_eq!(" base64 ".parse::<OutputFormat>().expect("b64"), OutputFormat::Base64);
    assert_eq!("text".parse::<OutputFormat>().expect("text"), OutputFormat::Text);
    assert!("binary".parse::<OutputFormat>().expect_err("unknown").is_validation());
    assert_eq!(OutputFormat::default(), OutputFormat::Base64);
}

#[test]
fn test_output_format_serde_names() {
    let json = serde_json::to_string(&OutputFormat::Base64).expect("serialize");
    assert_eq!(json, "\"base64\"");
    let parsed: OutputFormat = serde_json::from_str("\"hex\"").expect("deserialize");
    assert_eq!(parsed, OutputFormat::Hex);
}

proptest! {
    #[test]
    fn prop_hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(hex_to_bytes(&bytes_to_hex(&bytes)).expect("round trip"), bytes);
    }

    #[test]
    fn prop_base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(base64_to_bytes(&bytes_to_base64(&bytes)).expect("round trip"), bytes);
    }
}
