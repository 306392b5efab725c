//! Value frequency index
//!
//! Maps each value to the number of keys currently holding it, so
//! `NUMEQUALTO` is a single hash lookup instead of a scan.
//!
//! # Invariant
//!
//! Every stored count is positive. A count that would drop to zero removes
//! the entry, so `len()` is the number of distinct live values.

use nestkv_core::Value;
use rustc_hash::FxHashMap;

/// Reverse index from value to key count
#[derive(Debug, Default, Clone)]
pub struct FrequencyIndex {
    counts: FxHashMap<Value, usize>,
}

impl FrequencyIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with room for `capacity` distinct values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record one more key holding `value`
    pub fn increment(&mut self, value: &Value) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.clone(), 1);
            }
        }
    }

    /// Record one fewer key holding `value`
    ///
    /// Removes the entry when the count reaches zero. Decrementing a value
    /// that is not tracked is a no-op.
    pub fn decrement(&mut self, value: &Value) {
        let exhausted = match self.counts.get_mut(value) {
            Some(count) if *count > 1 => {
                *count -= 1;
                false
            }
            Some(_) => true,
            None => false,
        };
        if exhausted {
            self.counts.remove(value);
        }
    }

    /// Number of keys holding `value`, 0 if none
    #[inline]
    pub fn count_of(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values tracked
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no value is tracked
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of keys in the owning store
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(value, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Value, usize)> {
        self.counts.iter().map(|(v, c)| (v, *c))
    }
}
