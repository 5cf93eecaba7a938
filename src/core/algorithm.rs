use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::encoders::algorithms::errors::CodecError;

/// The closed set of supported transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    /// Lowercase hex of the UTF-8 bytes
    Hex,
    /// Standard padded Base64 of the UTF-8 bytes
    Base64,
    /// Rotate letters by 13 (self-inverse)
    Rot13,
    /// Mirror letters A↔Z (self-inverse)
    Atbash,
    /// International Morse, `/` between words
    Morse,
    /// Zig-zag transposition across N rails
    RailFence,
    /// Repeating-key letter shift
    Vigenere,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::Hex,
        AlgorithmId::Base64,
        AlgorithmId::Rot13,
        AlgorithmId::Atbash,
        AlgorithmId::Morse,
        AlgorithmId::RailFence,
        AlgorithmId::Vigenere,
    ];

    /// Identifiers of every algorithm, in listing order.
    pub fn names() -> [&'static str; 7] {
        Self::ALL.map(|id| id.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Hex => "hex",
            AlgorithmId::Base64 => "base64",
            AlgorithmId::Rot13 => "rot13",
            AlgorithmId::Atbash => "atbash",
            AlgorithmId::Morse => "morse",
            AlgorithmId::RailFence => "railfence",
            AlgorithmId::Vigenere => "vigenere",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmId::Hex => "Hex",
            AlgorithmId::Base64 => "Base64",
            AlgorithmId::Rot13 => "ROT13",
            AlgorithmId::Atbash => "Atbash",
            AlgorithmId::Morse => "Morse",
            AlgorithmId::RailFence => "Rail Fence",
            AlgorithmId::Vigenere => "Vigenère",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AlgorithmId::Hex => "lowercase hex digits of the UTF-8 bytes",
            AlgorithmId::Base64 => "standard padded Base64 of the UTF-8 bytes",
            AlgorithmId::Rot13 => "rotate letters by 13 places",
            AlgorithmId::Atbash => "mirror letters (A<->Z, B<->Y, ...)",
            AlgorithmId::Morse => "dots and dashes, '/' between words",
            AlgorithmId::RailFence => "zig-zag transposition across N rails",
            AlgorithmId::Vigenere => "shift letters by a repeating key",
        }
    }

    /// True when encode and decode are the same operation and mode is ignored.
    pub fn is_involution(&self) -> bool {
        matches!(self, AlgorithmId::Rot13 | AlgorithmId::Atbash)
    }

    /// Name of the extra parameter this algorithm reads, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            AlgorithmId::RailFence => Some("rails"),
            AlgorithmId::Vigenere => Some("key"),
            _ => None,
        }
    }
}

impl FromStr for AlgorithmId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CodecError::unknown_algorithm(s, &Self::names()))
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[serde(alias = "enc")]
    Encode,
    #[serde(alias = "dec")]
    Decode,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "encode" | "enc" => Ok(Mode::Encode),
            "decode" | "dec" => Ok(Mode::Decode),
            _ => Err(format!("Unknown mode: {} (expected encode or decode)", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
