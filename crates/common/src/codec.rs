//! Reversible text codec used for values persisted in session storage.
//!
//! `encode` percent-encodes the input and then base64-encodes the result, so
//! any UTF-8 string survives a round trip. This is obfuscation only; anyone
//! with access to the stored value can reverse it.

use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// Failure to reverse an encoded payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid base64 payload: {0}")]
    Base64(String),

    #[error("invalid percent-encoded payload: {0}")]
    Encoding(String),
}

/// Encode arbitrary text into an ASCII-safe string.
pub fn encode(data: &str) -> String {
    BASE64.encode(urlencoding::encode(data).as_bytes())
}

/// Reverse [`encode`].
///
/// Fails on malformed base64, non-UTF-8 content, or broken percent escapes.
pub fn decode(encoded: &str) -> Result<String, CodecError> {
    let bytes = BASE64.decode(encoded.trim()).map_err(|e| CodecError::Base64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| CodecError::Encoding(e.to_string()))?;
    urlencoding::decode(&text)
        .map(Cow::into_owned)
        .map_err(|e| CodecError::Encoding(e.to_string()))
}

/// Base64 of a serialized request body, sent as an integrity hint.
///
/// Not a cryptographic digest.
pub fn content_hash(serialized: &str) -> String {
    BASE64.encode(serialized.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_unicode_and_symbols() {
        let raw = r#"{"accessToken":"a+b/c=","note":"Đăng nhập ✓"}"#;
        let encoded = encode(raw);
        assert!(encoded.is_ascii());
        assert_eq!(decode(&encoded).unwrap(), raw);
    }

    #[test]
    fn empty_input_round_trips() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(decode("not base64!!"), Err(CodecError::Base64(_))));
    }

    #[test]
    fn rejects_broken_percent_escape() {
        // "%FF" decodes to a lone byte that is not valid UTF-8
        let payload = BASE64.encode("%FF");
        assert!(matches!(decode(&payload), Err(CodecError::Encoding(_))));
    }

    #[test]
    fn content_hash_is_plain_base64() {
        assert_eq!(content_hash(r#"{"a":1}"#), "eyJhIjoxfQ==");
    }
}
