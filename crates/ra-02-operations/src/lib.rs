//! # RA-02 Operations - Entry-Point Dispatch Subsystem
//!
//! ## Purpose
//!
//! Parses the aspect's operation entry-point calldata and routes it to the
//! state subsystem. The wire contract is:
//!
//! ```text
//! +----------------+--------------------------+
//! | opcode (2 B)   | params (variable)        |
//! +----------------+--------------------------+
//! ```
//!
//! The opcode is big-endian unsigned 16-bit; the params format is defined
//! per opcode.
//!
//! ## Recognized Opcodes
//!
//! | Opcode | Name | Params | Returns |
//! |--------|------|--------|---------|
//! | `0x0001` | registerSysPlayer | 20-byte address | empty |
//! | `0x1001` | getSysPlayers | none | registry blob string |
//! | `0x1002` | getAAWalletNonce | 20-byte address | decimal nonce string |
//!
//! Opcodes with high nibble `0x1` are read-only by convention. The
//! dispatcher reports the convention via [`domain::Opcode::is_read_only`]
//! but does not enforce it.
//!
//! ## Failure Semantics
//!
//! Every error aborts the whole invocation at the point of detection; there
//! is no partial success. Failed parameter validation leaves state
//! untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod errors;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::{Opcode, OperationRequest};
    pub use crate::errors::OperationError;
    pub use crate::service::OperationService;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Operations";
