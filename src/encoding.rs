//! Text decoding for the signature and data files

use crate::error::VerificationResult;
use base64::{engine::general_purpose, Engine as _};

/// Decode base64 signature text into raw signature bytes.
///
/// Uses the standard alphabet with padding. ASCII whitespace such as line
/// wrapping or a trailing newline is skipped; anything else outside the
/// alphabet is an error.
pub fn decode_signature_base64(text: &str) -> VerificationResult<Vec<u8>> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(general_purpose::STANDARD.decode(compact)?)
}

/// Decode hex data text into the message bytes, trimming surrounding whitespace
pub fn decode_data_hex(text: &str) -> VerificationResult<Vec<u8>> {
    Ok(hex::decode(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_hex_single_zero_byte() {
        assert_eq!(decode_data_hex("00").unwrap(), vec![0u8]);
    }

    #[test]
    fn test_hex_trims_and_ignores_case() {
        assert_eq!(
            decode_data_hex("  68656C6c6f\r\n").unwrap(),
            b"hello".to_vec()
        );
    }

    #[test]
    fn test_hex_empty_is_empty_message() {
        assert!(decode_data_hex("\n").unwrap().is_empty());
    }

    #[test]
    fn test_hex_odd_length_rejected() {
        let err = decode_data_hex("abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn test_hex_invalid_alphabet_rejected() {
        let err = decode_data_hex("zz").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn test_hex_inner_whitespace_rejected() {
        assert!(decode_data_hex("68 65").is_err());
    }

    #[test]
    fn test_base64_decodes_with_line_breaks() {
        assert_eq!(
            decode_signature_base64("aGVs\nbG8=\n").unwrap(),
            b"hello".to_vec()
        );
    }

    #[test]
    fn test_base64_invalid_character_rejected() {
        let err = decode_signature_base64("aGVs*G8=").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn test_base64_bad_padding_rejected() {
        let err = decode_signature_base64("aGVsbG8").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn test_base64_url_safe_alphabet_rejected() {
        assert!(decode_signature_base64("-_-_").is_err());
    }
}
