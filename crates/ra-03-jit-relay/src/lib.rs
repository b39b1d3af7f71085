//! # RA-03 JIT Relay - Intercept-Time Call Synthesis Subsystem
//!
//! ## Purpose
//!
//! Implements the just-in-time move policy: when a non-registered player's
//! `move(uint8)` call is intercepted at the pre-contract-call hook, one
//! relay call is synthesized and submitted for every registered system
//! player, in registration order, before the original call proceeds.
//!
//! ## Trigger State Machine
//!
//! ```text
//! Idle -> Intercepted -> Originator        (caller is registered: pass through)
//!                     -> RelayInProgress   (submit one call per player)
//!                     -> Done
//! ```
//!
//! ## Failure Semantics
//!
//! A failed submission fails the whole triggering call. No retry, no
//! partial success: nonces are advanced only after the submitter
//! acknowledges, so an abort leaves later players' counters untouched.
//!
//! ## Determinism
//!
//! The synthesized move direction is derived from a fixed byte of the
//! triggering transaction's hash, not a true RNG, so replay produces the
//! same relay calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::RecordingJitSubmitter;
    pub use crate::domain::abi::{encode_execute, encode_move};
    pub use crate::domain::direction::derive_direction;
    pub use crate::domain::entities::{JitCallRequest, JitCallResponse, PreContractCallCtx};
    pub use crate::domain::selector::{extract_selector, selector, MOVE_SELECTOR};
    pub use crate::errors::RelayError;
    pub use crate::ports::JitCallSubmitter;
    pub use crate::service::{RelayConfig, RelayOutcome, RelayService};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "JIT Relay";
