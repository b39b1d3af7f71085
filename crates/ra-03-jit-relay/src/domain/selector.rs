//! # Method Selectors
//!
//! A method selector is the first four bytes of the Keccak-256 hash of the
//! method signature; calldata starts with the selector of the invoked
//! method.

use sha3::{Digest, Keccak256};

/// Selector of the watched game method `move(uint8)`.
pub const MOVE_SELECTOR: [u8; 4] = [0x70, 0xe8, 0x7a, 0xaf];

/// Computes the 4-byte selector for a method signature.
#[must_use]
pub fn selector(signature: &str) -> [u8; 4] {
    let mut hasher = Keccak256::new();
    hasher.update(signature.as_bytes());
    let digest = hasher.finalize();
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Extracts the selector from raw calldata, `None` if shorter than 4 bytes.
#[must_use]
pub fn extract_selector(calldata: &[u8]) -> Option<[u8; 4]> {
    calldata
        .get(..4)
        .map(|head| [head[0], head[1], head[2], head[3]])
}

// =============================================================================
// TESTS
// =============================================================================
