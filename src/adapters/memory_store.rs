//! In-memory remote store.
//!
//! Implements [`RemoteStore`] over a `HashMap` with the same
//! missing-reads-as-zero semantics as the HTTP backend.  Used as the
//! simulation backend for host tests; it also counts writes so tests can
//! assert that noise and rejected events never touch the store.

use std::collections::HashMap;

use crate::app::ports::{RemoteStore, StoreError, StoreKey};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<StoreKey, u64>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` without counting it as a write.
    #[must_use]
    pub fn with(mut self, key: StoreKey, value: u64) -> Self {
        self.values.insert(key, value);
        self
    }

    /// Raw stored value; `None` if the key was never written or seeded.
    pub fn value(&self, key: StoreKey) -> Option<u64> {
        self.values.get(&key).copied()
    }

    /// Number of `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RemoteStore for MemoryStore {
    fn get(&mut self, key: StoreKey) -> Result<u64, StoreError> {
        Ok(self.value(key).unwrap_or(0))
    }

    fn set(&mut self, key: StoreKey, value: u64) -> Result<(), StoreError> {
        self.writes += 1;
        self.values.insert(key, value);
        Ok(())
    }
}
