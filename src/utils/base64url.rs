//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate pinned to the URL-safe, no-padding
//! alphabet used by the token wire format. Decode failures surface as
//! [`Error::MalformedToken`] with the underlying diagnostic.

use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode bytes to a Base64URL string (no padding)
pub(crate) fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a UTF-8 string to Base64URL
pub(crate) fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a Base64URL string to bytes
pub(crate) fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::MalformedToken(format!("base64url decoding failed: {e}")))
}

/// Decode a Base64URL string to a UTF-8 string
pub(crate) fn decode_string(input: &str) -> Result<String> {
    decode_bytes(input).and_then(|bytes| {
        String::from_utf8(bytes)
            .map_err(|e| Error::MalformedToken(format!("invalid UTF-8: {e}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let original = b"Hello, World!";
        let encoded = encode_bytes(original);
        let decoded = decode_bytes(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_no_padding() {
        // Lengths 1..=3 exercise every remainder branch of the alphabet
        assert_eq!(encode_bytes(b"a"), "YQ");
        assert_eq!(encode_bytes(b"ab"), "YWI");
        assert_eq!(encode_bytes(b"abc"), "YWJj");
    }

    #[test]
    fn test_url_safe_alphabet() {
        // 0xfb 0xff encodes to characters outside the standard alphabet
        let encoded = encode_bytes(&[0xfb, 0xff, 0xfe]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(
            decode_bytes("!!!"),
            Err(Error::MalformedToken(_))
        ));
        // Standard base64 padding is rejected by the no-pad engine
        assert!(matches!(
            decode_bytes("SGVsbG8="),
            Err(Error::MalformedToken(_))
        ));
    }

    #[test]
    fn test_decode_valid() {
        assert_eq!(decode_bytes("SGVsbG8").unwrap(), b"Hello");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_string("").unwrap(), "");
    }

    #[test]
    fn test_decode_string_rejects_invalid_utf8() {
        let encoded = encode_bytes(&[0xff, 0xfe, 0xfd]);
        let result = decode_string(&encoded);
        assert!(matches!(result, Err(Error::MalformedToken(msg)) if msg.contains("UTF-8")));
    }
}
