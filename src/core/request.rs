use crate::core::algorithm::Mode;

/// Everything one transform call needs.
///
/// `algorithm` stays the caller's raw selector so an unrecognized name can be
/// reported back verbatim. `rails` only matters to `railfence` and `key` only
/// to `vigenere`; other algorithms ignore them.
///
/// # Example
///
/// ```
/// use decipher::{CodecRequest, Mode};
///
/// let request = CodecRequest::new("vigenere", "ATTACKATDAWN")
///     .with_mode(Mode::Encode)
///     .with_key("LEMON");
/// assert_eq!(decipher::transform(&request).unwrap(), "LXFOPVEFRNHR");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecRequest {
    pub algorithm: String,
    pub mode: Option<Mode>,
    pub input: String,
    pub rails: Option<i64>,
    pub key: Option<String>,
}

impl CodecRequest {
    /// A request with no mode and no parameters.
    pub fn new(algorithm: impl Into<String>, input: impl Into<String>) -> Self {
        CodecRequest {
            algorithm: algorithm.into(),
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn encode(algorithm: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(algorithm, input).with_mode(Mode::Encode)
    }

    pub fn decode(algorithm: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(algorithm, input).with_mode(Mode::Decode)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_rails(mut self, rails: i64) -> Self {
        self.rails = Some(rails);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}
