//! # System-Player Registry
//!
//! Serializes the growing list of system-player addresses into a single hex
//! blob under one well-known key:
//!
//! ```text
//! +------------+----------------+----------------+---
//! | count (4)  | entry 0 (40)   | entry 1 (40)   | ...
//! +------------+----------------+----------------+---
//! ```
//!
//! The count is a big-endian 16-bit integer in hex characters; entries are
//! 40 lowercase hex characters each, in insertion order. The count is
//! re-encoded fixed-width on every append, so `len == 4 + 40 * count` holds
//! across increments past single-digit boundaries.

use crate::domain::errors::StateError;
use crate::ports::StateStore;
use shared_types::Address;
use std::sync::Arc;
use tracing::debug;

/// Well-known storage key for the registry blob.
pub const SYS_PLAYER_STORAGE_KEY: &str = "SYS_PLAYER_STORAGE_KEY";

/// Hex-character width of the count prefix.
const COUNT_HEX_WIDTH: usize = 4;

/// Hex-character width of one address entry.
const ENTRY_HEX_WIDTH: usize = Address::HEX_WIDTH;

/// Maximum entry count expressible in the 2-byte count field.
const MAX_COUNT: u16 = u16::MAX;

/// Registry of system players over an injected [`StateStore`].
pub struct RegistryStore<S: StateStore> {
    store: Arc<S>,
    key: String,
}

impl<S: StateStore> RegistryStore<S> {
    /// Creates a registry over `store` under the well-known key.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, SYS_PLAYER_STORAGE_KEY)
    }

    /// Creates a registry under a caller-chosen key.
    pub fn with_key(store: Arc<S>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Appends `player` to the registry, incrementing the count.
    ///
    /// The whole blob is rewritten as a single value; partial writes cannot
    /// be observed.
    pub fn append(&self, player: &Address) -> Result<(), StateError> {
        let blob = self.raw()?;
        let encoded = if blob.is_empty() {
            format!("0001{}", player.to_hex())
        } else {
            let (count, entries) = decode_prefix(&blob)?;
            if count == MAX_COUNT {
                return Err(StateError::RegistryFull {
                    capacity: MAX_COUNT,
                });
            }
            format!("{:04x}{}{}", count + 1, entries, player.to_hex())
        };
        self.store.put(&self.key, encoded)?;
        debug!(player = %player, "registered system player");
        Ok(())
    }

    /// Returns all registered players in insertion order.
    pub fn list(&self) -> Result<Vec<Address>, StateError> {
        let blob = self.raw()?;
        if blob.is_empty() {
            return Ok(Vec::new());
        }
        let (count, entries) = decode_prefix(&blob)?;
        let mut players = Vec::with_capacity(count as usize);
        for i in 0..count as usize {
            let chunk = &entries[i * ENTRY_HEX_WIDTH..(i + 1) * ENTRY_HEX_WIDTH];
            let player = Address::from_hex(chunk).map_err(|_| StateError::MalformedEntry {
                index: i,
                entry: chunk.to_string(),
            })?;
            players.push(player);
        }
        Ok(players)
    }

    /// Returns the number of registered players.
    pub fn count(&self) -> Result<u16, StateError> {
        let blob = self.raw()?;
        if blob.is_empty() {
            return Ok(0);
        }
        let (count, _) = decode_prefix(&blob)?;
        Ok(count)
    }

    /// Returns true if `player` is registered.
    pub fn contains(&self, player: &Address) -> Result<bool, StateError> {
        Ok(self.list()?.contains(player))
    }

    /// Returns the blob verbatim ("" when nothing is registered yet).
    pub fn raw(&self) -> Result<String, StateError> {
        Ok(self.store.get(&self.key)?.unwrap_or_default())
    }
}

/// Splits a non-empty blob into its count and entry region, validating the
/// length invariant.
fn decode_prefix(blob: &str) -> Result<(u16, &str), StateError> {
    let prefix = blob
        .get(..COUNT_HEX_WIDTH)
        .ok_or_else(|| StateError::MalformedCountPrefix(blob.to_string()))?;
    let count = u16::from_str_radix(prefix, 16)
        .map_err(|_| StateError::MalformedCountPrefix(prefix.to_string()))?;
    let expected = COUNT_HEX_WIDTH + ENTRY_HEX_WIDTH * count as usize;
    if blob.len() != expected {
        return Err(StateError::MalformedRegistryBlob {
            count,
            expected,
            actual: blob.len(),
        });
    }
    Ok((count, &blob[COUNT_HEX_WIDTH..]))
}

// =============================================================================
// TESTS
// =============================================================================
