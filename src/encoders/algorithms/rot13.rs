//! ROT13: rotate ASCII letters halfway round their alphabet.
//!
//! The transform is its own inverse, so there is no separate `decode`.

/// Rotates every ASCII letter by 13 places, keeping its case.
///
/// # Example
///
/// ```
/// assert_eq!(decipher::rot13::encode("Hello"), "Uryyb");
/// assert_eq!(decipher::rot13::encode("Uryyb"), "Hello");
/// ```
pub fn encode(text: &str) -> String {
    text.chars().map(rotate).collect()
}

fn rotate(c: char) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    (((c as u8 - base + 13) % 26) + base) as char
}
