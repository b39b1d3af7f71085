//! # Direction Derivation
//!
//! The relayed move needs a direction argument, but the hook runs inside
//! deterministic replay: a true RNG would make validators disagree. The
//! direction is therefore derived from a fixed byte of the triggering
//! transaction's hash.

use shared_types::TxHash;

/// Byte of the transaction hash the direction is read from.
pub const DIRECTION_BYTE_OFFSET: usize = 0;

/// Number of move directions on the game grid.
pub const DIRECTION_MODULUS: u8 = 4;

/// Derives the move direction (`0..4`) for a triggering transaction.
#[must_use]
pub fn derive_direction(tx_hash: &TxHash) -> u8 {
    tx_hash.as_bytes()[DIRECTION_BYTE_OFFSET] % DIRECTION_MODULUS
}

// =============================================================================
// TESTS
// =============================================================================
