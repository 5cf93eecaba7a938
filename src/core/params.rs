//! Normalization and validation of algorithm parameters.
//!
//! Both parameter types can only be obtained through their constructors, so
//! a codec that receives one never has to re-check it.

use crate::encoders::algorithms::errors::CodecError;

/// Rail count used when the caller gives none (or gives something non-numeric).
pub const DEFAULT_RAILS: usize = 3;

/// Fewer rails than this is not a transposition.
pub const MIN_RAILS: usize = 2;

/// A rail count that has been clamped to at least [`MIN_RAILS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectiveRails(usize);

impl EffectiveRails {
    /// Clamps an explicit count.
    pub fn new(rails: usize) -> Self {
        EffectiveRails(rails.max(MIN_RAILS))
    }

    /// Resolves an optional (possibly negative) request value against a default.
    ///
    /// ```
    /// use decipher::EffectiveRails;
    ///
    /// assert_eq!(EffectiveRails::resolve(None, 3).get(), 3);
    /// assert_eq!(EffectiveRails::resolve(Some(1), 3).get(), 2);
    /// assert_eq!(EffectiveRails::resolve(Some(-7), 3).get(), 2);
    /// ```
    pub fn resolve(rails: Option<i64>, default: usize) -> Self {
        match rails {
            Some(n) if n < MIN_RAILS as i64 => EffectiveRails(MIN_RAILS),
            Some(n) => EffectiveRails::new(usize::try_from(n).unwrap_or(usize::MAX)),
            None => EffectiveRails::new(default),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for EffectiveRails {
    fn default() -> Self {
        EffectiveRails(DEFAULT_RAILS)
    }
}

/// Interprets caller-supplied rail text.
///
/// Integers parse directly and decimals are floored. Anything non-numeric
/// yields `None`, which [`EffectiveRails::resolve`] turns into the default.
pub fn parse_rails(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.floor() as i64)
}

/// A Vigenère key reduced to its ASCII letters, upper-cased. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Fails with `MissingParameter("key")` when no letters survive.
    ///
    /// ```
    /// use decipher::NormalizedKey;
    ///
    /// assert_eq!(NormalizedKey::new("le-mon 42").unwrap().as_str(), "LEMON");
    /// assert!(NormalizedKey::new("123").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, CodecError> {
        let letters: String = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if letters.is_empty() {
            return Err(CodecError::missing_parameter("key"));
        }
        Ok(NormalizedKey(letters))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shift (0-25) for the letter at `cursor`, wrapping round the key.
    pub fn shift_at(&self, cursor: usize) -> u8 {
        let bytes = self.0.as_bytes();
        bytes[cursor % bytes.len()] - b'A'
    }
}
