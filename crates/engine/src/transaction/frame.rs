//! Undo frame for one transaction block

use nestkv_core::{Key, PriorState};
use nestkv_storage::KvStore;
use rustc_hash::FxHashMap;

/// Prior states of every key mutated inside one transaction block
#[derive(Debug, Default, Clone)]
pub struct UndoFrame {
    entries: FxHashMap<Key, PriorState>,
}

impl UndoFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`'s prior state unless this frame already holds one
    ///
    /// Returns `true` if the state was recorded.
    pub fn capture(&mut self, key: &Key, prior: impl FnOnce() -> PriorState) -> bool {
        if self.entries.contains_key(key.as_str()) {
            return false;
        }
        self.entries.insert(key.clone(), prior());
        true
    }

    /// Captured prior state of `key`, if any
    pub fn prior_state(&self, key: &str) -> Option<&PriorState> {
        self.entries.get(key)
    }

    /// Check if `key` has been captured
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of captured keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no key was captured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Restore every captured key in `store`, consuming the frame
    ///
    /// Entries are independent so the order of restoration does not matter.
    pub fn apply(self, store: &mut KvStore) {
        for (key, prior) in self.entries {
            store.restore(key, prior);
        }
    }
}
