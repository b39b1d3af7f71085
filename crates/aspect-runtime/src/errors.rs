//! # Error Types
//!
//! The unified error surface the host sees from aspect invocations.

use ra_02_operations::errors::OperationError;
use ra_03_jit_relay::errors::RelayError;
use thiserror::Error;

/// Any failure raised by a hook or entry-point invocation.
///
/// All variants are fatal for the current invocation; the host propagates
/// them as a transaction abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AspectError {
    /// The operation entry point failed.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// The relay trigger failed.
    #[error(transparent)]
    Relay(#[from] RelayError),
}
