//! Hexadecimal spelling of a text's UTF-8 bytes.

use super::errors::CodecError;
use crate::encoders::primitives::{bytes_to_hex, bytes_to_text, hex_to_bytes, text_to_bytes};

/// Encodes text as lowercase hex with no separators.
///
/// # Example
///
/// ```
/// assert_eq!(decipher::hex::encode("AB"), "4142");
/// ```
pub fn encode(text: &str) -> String {
    bytes_to_hex(text_to_bytes(text))
}

/// Decodes hex back to text, ignoring any non-hex characters in the input.
pub fn decode(encoded: &str) -> Result<String, CodecError> {
    bytes_to_text(hex_to_bytes(encoded)?)
}
