//! Vigenère cipher.
//!
//! Only ASCII letters are shifted, and only they advance the key cursor.
//! Everything else is copied through untouched, which keeps
//! `decode(encode(x, k), k) == x` for arbitrary text.

use crate::core::algorithm::Mode;
use crate::core::params::NormalizedKey;

/// Shifts each letter forward by the key.
///
/// # Example
///
/// ```
/// use decipher::{NormalizedKey, vigenere};
///
/// let key = NormalizedKey::new("LEMON").unwrap();
/// assert_eq!(vigenere::encode("ATTACKATDAWN", &key), "LXFOPVEFRNHR");
/// ```
pub fn encode(text: &str, key: &NormalizedKey) -> String {
    shift_letters(text, key, Mode::Encode)
}

/// Shifts each letter back by the key.
pub fn decode(text: &str, key: &NormalizedKey) -> String {
    shift_letters(text, key, Mode::Decode)
}

fn shift_letters(text: &str, key: &NormalizedKey, mode: Mode) -> String {
    let mut cursor = 0usize;
    text.chars()
        .map(|c| {
            let base = match c {
                'A'..='Z' => b'A',
                'a'..='z' => b'a',
                _ => return c,
            };
            let shift = key.shift_at(cursor);
            cursor += 1;

            let offset = c as u8 - base;
            let shifted = match mode {
                Mode::Encode => (offset + shift) % 26,
                Mode::Decode => (offset + 26 - shift) % 26,
            };
            (base + shifted) as char
        })
        .collect()
}
