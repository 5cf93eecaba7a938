//! Morse code with `/` as the word gap.
//!
//! Encoding keeps characters it has no code for, and decoding turns tokens it
//! does not recognize into `?`. Neither direction can fail.

use crate::core::morse_table::MorseTable;

/// Marker emitted for an unrecognized token when decoding.
pub const UNKNOWN: char = '?';

/// Upper-cases the text and spells each character, joined by single spaces.
///
/// # Example
///
/// ```
/// assert_eq!(decipher::morse::encode("SOS"), "... --- ...");
/// assert_eq!(decipher::morse::encode("hi 5"), ".... .. / .....");
/// ```
pub fn encode(text: &str) -> String {
    let table = MorseTable::international();
    let upper = text.to_uppercase();

    let mut tokens: Vec<String> = Vec::with_capacity(upper.len());
    for c in upper.chars() {
        match table.encode_char(c) {
            Some(code) => tokens.push(code.to_string()),
            None => tokens.push(c.to_string()),
        }
    }
    tokens.join(" ")
}

/// Splits on runs of whitespace and maps each token back to a character.
pub fn decode(encoded: &str) -> String {
    let table = MorseTable::international();
    encoded
        .split_whitespace()
        .map(|token| table.decode_token(token).unwrap_or(UNKNOWN))
        .collect()
}
