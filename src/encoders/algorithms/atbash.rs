//! Atbash: mirror each ASCII letter within its alphabet (A↔Z, B↔Y, ...).
//!
//! Like ROT13 this is an involution; one function serves both directions.

/// Mirrors every ASCII letter, keeping its case.
///
/// # Example
///
/// ```
/// assert_eq!(decipher::atbash::encode("Hello"), "Svool");
/// ```
pub fn encode(text: &str) -> String {
    text.chars().map(mirror).collect()
}

fn mirror(c: char) -> char {
    match c {
        'A'..='Z' => (b'Z' - (c as u8 - b'A')) as char,
        'a'..='z' => (b'z' - (c as u8 - b'a')) as char,
        _ => c,
    }
}
