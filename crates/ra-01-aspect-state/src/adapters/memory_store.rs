use crate::domain::errors::StateError;
use crate::ports::StateStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory implementation of [`StateStore`] for tests and the demo runtime.
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if no key has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StateError> {
        let entries = self.entries.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StateError> {
        let mut entries = self.entries.write().map_err(|_| StateError::LockPoisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
