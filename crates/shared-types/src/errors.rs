//! # Shared Error Types
//!
//! Errors raised by the hex codec and the value-object constructors.

use thiserror::Error;

/// Errors from hex decoding and fixed-width type construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input is not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded byte length does not match the fixed width of the target type.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte width.
        expected: usize,
        /// Width actually supplied.
        actual: usize,
    },
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHex(err.to_string())
    }
}
