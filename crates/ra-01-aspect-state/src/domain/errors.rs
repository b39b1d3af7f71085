//! # Error Types
//!
//! All error types for registry and nonce state access.

use thiserror::Error;

/// Errors from state access operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Stored registry blob length does not match the count prefix.
    #[error("malformed registry blob: count {count} requires {expected} hex chars, got {actual}")]
    MalformedRegistryBlob {
        /// Count parsed from the blob prefix.
        count: u16,
        /// Hex-char length the count implies.
        expected: usize,
        /// Hex-char length actually stored.
        actual: usize,
    },

    /// Registry count prefix is not valid hexadecimal.
    #[error("malformed registry count prefix: {0:?}")]
    MalformedCountPrefix(String),

    /// A registry entry is not a valid hex address.
    #[error("malformed registry entry {index}: {entry:?}")]
    MalformedEntry {
        /// Zero-based position of the entry in the blob.
        index: usize,
        /// Offending 40-char slice.
        entry: String,
    },

    /// Registry already holds the maximum number of entries.
    #[error("registry full: count is at the 16-bit capacity of {capacity}")]
    RegistryFull {
        /// Maximum entry count the 2-byte field can express.
        capacity: u16,
    },

    /// Stored nonce value is not a decimal integer.
    #[error("corrupt nonce under key {key:?}: {value:?}")]
    CorruptNonce {
        /// Storage key (the wallet address).
        key: String,
        /// Offending stored value.
        value: String,
    },

    /// A lock in the store adapter was poisoned.
    #[error("state store lock poisoned")]
    LockPoisoned,

    /// Other store-level failure.
    #[error("state store error: {0}")]
    Other(String),
}
