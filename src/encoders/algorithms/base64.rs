//! Standard Base64 over a text's UTF-8 bytes.

use super::errors::CodecError;
use crate::encoders::primitives::{base64_to_bytes, bytes_to_base64, bytes_to_text, text_to_bytes};

/// Encodes text as padded standard Base64.
///
/// # Example
///
/// ```
/// assert_eq!(decipher::base64::encode("hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode(text: &str) -> String {
    bytes_to_base64(text_to_bytes(text))
}

/// Decodes Base64 back to text. Surrounding whitespace is ignored.
pub fn decode(encoded: &str) -> Result<String, CodecError> {
    bytes_to_text(base64_to_bytes(encoded.trim())?)
}
