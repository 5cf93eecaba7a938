//! The single entry point callers go through.

use crate::core::algorithm::{AlgorithmId, Mode};
use crate::core::params::{DEFAULT_RAILS, EffectiveRails, NormalizedKey};
use crate::core::request::CodecRequest;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::{atbash, base64, hex, morse, rail_fence, rot13, vigenere};

/// Runs one request to completion.
///
/// The algorithm is resolved first, then its parameters are validated, and
/// only then is the input touched. ROT13 and Atbash ignore `mode`; every other
/// algorithm requires one.
///
/// # Example
///
/// ```
/// use decipher::{CodecRequest, ErrorKind, transform};
///
/// assert_eq!(transform(&CodecRequest::encode("hex", "AB")).unwrap(), "4142");
/// assert_eq!(transform(&CodecRequest::new("rot13", "Hello")).unwrap(), "Uryyb");
///
/// let err = transform(&CodecRequest::decode("hex", "ABC")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidFormat);
/// ```
pub fn transform(request: &CodecRequest) -> Result<String, CodecError> {
    let algorithm: AlgorithmId = request.algorithm.parse()?;
    let input = request.input.as_str();

    match algorithm {
        AlgorithmId::Rot13 => Ok(rot13::encode(input)),
        AlgorithmId::Atbash => Ok(atbash::encode(input)),
        AlgorithmId::Hex => match require_mode(request)? {
            Mode::Encode => Ok(hex::encode(input)),
            Mode::Decode => hex::decode(input),
        },
        AlgorithmId::Base64 => match require_mode(request)? {
            Mode::Encode => Ok(base64::encode(input)),
            Mode::Decode => base64::decode(input),
        },
        AlgorithmId::Morse => match require_mode(request)? {
            Mode::Encode => Ok(morse::encode(input)),
            Mode::Decode => Ok(morse::decode(input)),
        },
        AlgorithmId::RailFence => {
            let rails = EffectiveRails::resolve(request.rails, DEFAULT_RAILS);
            match require_mode(request)? {
                Mode::Encode => Ok(rail_fence::encode(input, rails)),
                Mode::Decode => Ok(rail_fence::decode(input, rails)),
            }
        }
        AlgorithmId::Vigenere => {
            let key = NormalizedKey::new(request.key.as_deref().unwrap_or_default())?;
            match require_mode(request)? {
                Mode::Encode => Ok(vigenere::encode(input, &key)),
                Mode::Decode => Ok(vigenere::decode(input, &key)),
            }
        }
    }
}

fn require_mode(request: &CodecRequest) -> Result<Mode, CodecError> {
    request
        .mode
        .ok_or_else(|| CodecError::missing_parameter("mode"))
}
