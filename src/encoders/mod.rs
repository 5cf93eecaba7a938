pub mod algorithms;
pub mod primitives;

// Re-export the per-algorithm codecs at this level too
pub use algorithms::{atbash, base64, hex, morse, rail_fence, rot13, vigenere};
