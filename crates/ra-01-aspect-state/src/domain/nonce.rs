//! # Wallet Nonce Store
//!
//! One monotonically increasing counter per wallet address, stored as a
//! decimal string under the address's canonical hex form. Absent means zero.
//!
//! There is no compare-and-swap: the caller passes back the value it read in
//! the same invocation, and the host serializes invocations.

use crate::domain::errors::StateError;
use crate::ports::StateStore;
use shared_types::Address;
use std::sync::Arc;
use tracing::debug;

/// Per-wallet nonce counters over an injected [`StateStore`].
pub struct NonceStore<S: StateStore> {
    store: Arc<S>,
}

impl<S: StateStore> NonceStore<S> {
    /// Creates a nonce store over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the current nonce for `wallet`, zero if never written.
    pub fn get(&self, wallet: &Address) -> Result<u64, StateError> {
        let key = wallet.to_hex();
        match self.store.get(&key)? {
            None => Ok(0),
            Some(value) => value
                .parse::<u64>()
                .map_err(|_| StateError::CorruptNonce { key, value }),
        }
    }

    /// Stores `current + 1` for `wallet`.
    ///
    /// `current` must be the value read immediately prior in the same
    /// logical operation.
    pub fn increment(&self, wallet: &Address, current: u64) -> Result<(), StateError> {
        let next = current + 1;
        self.store.put(&wallet.to_hex(), next.to_string())?;
        debug!(wallet = %wallet, nonce = next, "advanced wallet nonce");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
