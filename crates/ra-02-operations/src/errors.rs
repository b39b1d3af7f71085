//! # Error Types
//!
//! All error types for operation dispatch.

use crate::domain::Opcode;
use ra_01_aspect_state::domain::StateError;
use thiserror::Error;

/// Errors raised while handling an entry-point invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Buffer too short to carry the 2-byte opcode.
    #[error("truncated request: {actual} bytes, need at least 2")]
    TruncatedRequest {
        /// Bytes actually received.
        actual: usize,
    },

    /// Opcode not in the recognized set.
    #[error("unknown op: 0x{0:04x}")]
    UnknownOperation(u16),

    /// Parameter length does not match the opcode's fixed width.
    #[error("invalid params for {}: expected {expected} bytes, got {actual}", .opcode.name())]
    InvalidParams {
        /// The opcode whose contract was violated.
        opcode: Opcode,
        /// Required parameter width in bytes.
        expected: usize,
        /// Width actually supplied.
        actual: usize,
    },

    /// State access failed.
    #[error("state error: {0}")]
    State(#[from] StateError),
}
