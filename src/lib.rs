//! Reversible classical text transforms behind one entry point.
//!
//! Seven algorithms are supported: hex, Base64, ROT13, Atbash, Morse,
//! Rail Fence and Vigenère. Build a [`CodecRequest`], hand it to
//! [`transform`], and get back the full output or a [`CodecError`]. Calls are
//! pure and share no state, so they can run from any thread in any order.
//!
//! ```
//! use decipher::{CodecRequest, transform};
//!
//! let request = CodecRequest::encode("railfence", "WEAREDISCOVEREDFLEEATONCE").with_rails(3);
//! let cipher = transform(&request).unwrap();
//! assert_eq!(cipher, "WECRLTEERDSOEEFEAOCAIVDEN");
//!
//! let back = transform(&CodecRequest::decode("railfence", cipher).with_rails(3)).unwrap();
//! assert_eq!(back, "WEAREDISCOVEREDFLEEATONCE");
//! ```
//!
//! Each codec is also usable directly through its module ([`hex`], [`base64`],
//! [`rot13`], [`atbash`], [`morse`], [`rail_fence`], [`vigenere`]).

mod core;
mod encoders;
mod engine;

pub mod prelude;

pub use crate::core::algorithm::{AlgorithmId, Mode};
pub use crate::core::config::{CONFIG_FILE_NAME, DecipherConfig, Settings};
pub use crate::core::morse_table::{MorseTable, WORD_GAP};
pub use crate::core::params::{DEFAULT_RAILS, EffectiveRails, MIN_RAILS, NormalizedKey, parse_rails};
pub use crate::core::request::CodecRequest;
pub use encoders::algorithms::{CodecError, ErrorKind, find_closest_algorithm};
pub use encoders::primitives;
pub use encoders::{atbash, base64, hex, morse, rail_fence, rot13, vigenere};
pub use engine::transform;

/// Whether error reports should carry ANSI color (honors `NO_COLOR`).
pub use encoders::algorithms::errors::should_use_color;

/// Result of a single transform call.
pub type CodecResult = Result<String, CodecError>;
