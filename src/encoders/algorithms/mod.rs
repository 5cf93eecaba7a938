pub mod atbash;
pub mod base64;
pub mod errors;
pub mod hex;
pub mod morse;
pub mod rail_fence;
pub mod rot13;
pub mod vigenere;

// Re-export error types for public API
pub use errors::{CodecError, ErrorKind, find_closest_algorithm};
