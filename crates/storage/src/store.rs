//! Key-value store kept consistent with its frequency index
//!
//! All mutations go through [`KvStore::raw_set`] and [`KvStore::raw_unset`],
//! which update the map and the index together. "Raw" means no transaction
//! bookkeeping happens here; the engine captures undo state before calling
//! in, and rollback calls [`KvStore::restore`] directly.

use crate::index::FrequencyIndex;
use nestkv_core::{Key, PriorState, Value};
use rustc_hash::FxHashMap;

/// Key → value map with a value frequency index
#[derive(Debug, Default, Clone)]
pub struct KvStore {
    data: FxHashMap<Key, Value>,
    index: FrequencyIndex,
}

impl KvStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            index: FrequencyIndex::with_capacity(capacity),
        }
    }

    /// Write `value` under `key`, replacing any previous value
    pub fn raw_set(&mut self, key: Key, value: Value) {
        self.index.increment(&value);
        if let Some(old) = self.data.insert(key, value) {
            self.index.decrement(&old);
        }
    }

    /// Remove `key`; no-op if it is not set
    ///
    /// Returns the removed value.
    pub fn raw_unset(&mut self, key: &str) -> Option<Value> {
        let old = self.data.remove(key)?;
        self.index.decrement(&old);
        Some(old)
    }

    /// Current value of `key`
    #[inline]
    pub fn raw_get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Current state of `key` as an explicit [`PriorState`]
    pub fn state_of(&self, key: &str) -> PriorState {
        self.data.get(key).cloned().into()
    }

    /// Put `key` back into a previously captured state
    pub fn restore(&mut self, key: Key, state: PriorState) {
        match state {
            PriorState::Absent => {
                self.raw_unset(key.as_str());
            }
            PriorState::Present(value) => self.raw_set(key, value),
        }
    }

    /// Number of keys currently holding `value`
    #[inline]
    pub fn count_equal_to(&self, value: &str) -> usize {
        self.index.count_of(value)
    }

    /// Check if a key is set
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of keys set
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if no key is set
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the frequency index
    pub fn index(&self) -> &FrequencyIndex {
        &self.index
    }

    /// Iterate over `(key, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.data.iter()
    }
}
