//! Conversions between text, raw bytes and their hex/Base64 spellings.
//!
//! The Base64 codec is a fixed 6-bit chunker over a bit buffer: bytes are
//! shifted in eight bits at a time and drained six bits per output digit.
//! Decoding runs the same buffer in reverse.

use crate::encoders::algorithms::errors::CodecError;

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE64_PAD: char = '=';
const BITS_PER_DIGIT: usize = 6;
// LCM(6, 8) / 6
const BASE64_GROUP: usize = 4;

/// Text to its UTF-8 bytes.
pub fn text_to_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}

/// UTF-8 bytes back to text. Invalid sequences are an error, never replaced.
pub fn bytes_to_text(bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|e| CodecError::decode(e.utf8_error().to_string()))
}

/// Lowercase hex, two digits per byte, no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Parses hex digits into bytes.
///
/// Every character outside `[0-9a-fA-F]` is dropped first, so spaced,
/// colon-separated or line-wrapped dumps decode as-is.
pub fn hex_to_bytes(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let cleaned: String = encoded.chars().filter(char::is_ascii_hexdigit).collect();
    if cleaned.len() % 2 != 0 {
        return Err(CodecError::invalid_format("odd hex length"));
    }
    ::hex::decode(&cleaned).map_err(|_| CodecError::invalid_format("invalid hex"))
}

/// Standard padded Base64.
pub fn bytes_to_base64(data: &[u8]) -> String {
    let output_chars = (data.len() * 8).div_ceil(BITS_PER_DIGIT);
    let mut result = String::with_capacity(output_chars.div_ceil(BASE64_GROUP) * BASE64_GROUP);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_DIGIT {
            bits_in_buffer -= BITS_PER_DIGIT;
            let index = ((bit_buffer >> bits_in_buffer) & 0x3F) as usize;
            result.push(BASE64_ALPHABET[index] as char);
        }
    }

    // Flush remaining bits, zero-filled on the right
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (BITS_PER_DIGIT - bits_in_buffer)) & 0x3F) as usize;
        result.push(BASE64_ALPHABET[index] as char);
    }

    while result.len() % BASE64_GROUP != 0 {
        result.push(BASE64_PAD);
    }

    result
}

/// Decodes standard Base64 the way browsers' `atob` does.
///
/// ASCII whitespace anywhere is ignored. When the remaining length is a
/// multiple of four, up to two trailing `=` are stripped; unpadded input is
/// accepted. Anything else (stray characters, interior `=`, a dangling single
/// digit) is `InvalidFormat("invalid base64")`.
pub fn base64_to_bytes(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let mut digits: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if digits.len() % BASE64_GROUP == 0 {
        for _ in 0..2 {
            if digits.last() == Some(&(BASE64_PAD as u8)) {
                digits.pop();
            }
        }
    }

    if digits.len() % BASE64_GROUP == 1 {
        return Err(invalid_base64());
    }

    let mut result = Vec::with_capacity(digits.len() * BITS_PER_DIGIT / 8);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &c in &digits {
        let digit = base64_digit(c).ok_or_else(invalid_base64)?;

        bit_buffer = (bit_buffer << BITS_PER_DIGIT) | (digit as u32);
        bits_in_buffer += BITS_PER_DIGIT;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    // Leftover bits (< 8) are padding and discarded
    Ok(result)
}

fn base64_digit(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

fn invalid_base64() -> CodecError {
    CodecError::invalid_format("invalid base64")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_hex_lowercase_no_separators() {
        assert_eq!(bytes_to_hex(b"AB"), "4142");
        assert_eq!(bytes_to_hex(&[0x00, 0xff, 0x0a]), "00ff0a");
        assert_eq!(bytes_to_hex(b""), "");
    }

    #[test]
    fn test_hex_decode_strips_separators() {
        assert_eq!(hex_to_bytes("41 42").unwrap(), b"AB");
        assert_eq!(hex_to_bytes("0x41:0X42").unwrap(), vec![0x04, 0x10, 0x42]);
        assert_eq!(hex_to_bytes("DE\nad").unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn test_hex_decode_odd_length() {
        let err = hex_to_bytes("ABC").unwrap_err();
        assert_eq!(err, CodecError::invalid_format("odd hex length"));
        // "4" + "1" + "4" once the spaces go
        assert!(hex_to_bytes("4 1 4").is_err());
    }

    #[test]
    fn test_base64_rfc4648_vectors() {
        let vectors: &[(&[u8], &str)] = &[
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (raw, encoded) in vectors {
            assert_eq!(bytes_to_base64(raw), *encoded);
            assert_eq!(base64_to_bytes(encoded).unwrap(), *raw);
        }
    }

    #[test]
    fn test_base64_high_bytes() {
        let data = [0xfb, 0xff, 0xbf];
        assert_eq!(bytes_to_base64(&data), "+/+/");
        assert_eq!(base64_to_bytes("+/+/").unwrap(), data);
    }

    #[test]
    fn test_base64_lenient_whitespace_and_padding() {
        assert_eq!(base64_to_bytes("  aGVsbG8gd29ybGQ=\n").unwrap(), b"hello world");
        assert_eq!(base64_to_bytes("aGVs\nbG8=").unwrap(), b"hello");
        assert_eq!(base64_to_bytes("Zg").unwrap(), b"f");
    }

    #[test]
    fn test_base64_malformed() {
        for bad in ["Zg=", "Z", "Zm9v!", "Zg==Zg==", "Z===", "-_-_"] {
            let err = base64_to_bytes(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "input {:?}", bad);
            assert_eq!(err, CodecError::invalid_format("invalid base64"));
        }
    }

    #[test]
    fn test_bytes_to_text_rejects_invalid_utf8() {
        let err = bytes_to_text(vec![0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeError);

        assert_eq!(bytes_to_text("héllo".as_bytes().to_vec()).unwrap(), "héllo");
    }
}
