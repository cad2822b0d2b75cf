//! # Error Types
//!
//! Errors raised while decoding the shared primitive types.

use thiserror::Error;

/// Errors that can occur while decoding hex-encoded identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Input is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded value has the wrong width for a fixed-size identifier.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
