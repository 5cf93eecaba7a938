//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use decipher::prelude::*;
//!
//! let out = transform(&CodecRequest::encode("morse", "SOS")).unwrap();
//! assert_eq!(out, "... --- ...");
//! ```

pub use crate::{
    // Request/response
    AlgorithmId,
    CodecError,
    CodecRequest,
    CodecResult,
    ErrorKind,
    Mode,

    // Parameters
    EffectiveRails,
    NormalizedKey,
    parse_rails,

    // Entry point
    transform,
};
