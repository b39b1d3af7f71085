//! # Error Types
//!
//! All error types for relay triggering.

use ra_01_aspect_state::domain::StateError;
use shared_types::Address;
use thiserror::Error;

/// Errors raised while handling an intercepted call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The relay submission API reported failure for one player.
    #[error("failed to submit the JIT call for {player:?}: {reason}")]
    SubmissionFailed {
        /// Player whose call was rejected.
        player: Address,
        /// Reason reported by the host, if any.
        reason: String,
    },

    /// State access failed.
    #[error("state error: {0}")]
    State(#[from] StateError),
}
