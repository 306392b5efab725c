//! Database engine
//!
//! [`Database`] is the single owner of the key-value store, its frequency
//! index and the transaction stack. Every operation runs to completion on
//! `&mut self`; there is no shared or global state.
//!
//! # Example
//!
//! ```
//! use nestkv_engine::Database;
//!
//! let mut db = Database::new();
//! db.set("a", "10");
//!
//! db.begin();
//! db.set("a", "20");
//! assert_eq!(db.count_equal_to("20"), 1);
//!
//! assert!(db.rollback());
//! assert_eq!(db.get("a").map(|v| v.as_str()), Some("10"));
//! assert!(!db.rollback());
//! ```

use crate::transaction::TransactionStack;
use nestkv_core::{Key, Value};
use nestkv_storage::{FrequencyIndex, KvStore};
use tracing::{debug, trace};

/// In-memory key-value database with nested transactions
#[derive(Debug, Default)]
pub struct Database {
    store: KvStore,
    transactions: TransactionStack,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for database configuration
    ///
    /// # Example
    ///
    /// ```
    /// use nestkv_engine::Database;
    ///
    /// let db = Database::builder().capacity(1024).build();
    /// assert!(db.is_empty());
    /// ```
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    // =========================================================================
    // Data operations
    // =========================================================================

    /// Set `key` to `value`
    ///
    /// Inside a transaction the key's prior state is captured into the
    /// innermost block first, unless that block already captured it.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if self.transactions.capture(&key, &self.store) {
            trace!(key = %key, depth = self.transactions.depth(), "captured prior state");
        }
        self.store.raw_set(key, value);
    }

    /// Current value of `key`
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.raw_get(key)
    }

    /// Unset `key`
    ///
    /// Unsetting a key that is already unset changes nothing and records
    /// nothing in the open block.
    pub fn unset(&mut self, key: &str) {
        if !self.store.contains(key) {
            return;
        }
        let key = Key::from(key);
        if self.transactions.capture(&key, &self.store) {
            trace!(key = %key, depth = self.transactions.depth(), "captured prior state");
        }
        self.store.raw_unset(key.as_str());
    }

    /// Number of keys currently set to `value`
    #[inline]
    pub fn count_equal_to(&self, value: &str) -> usize {
        self.store.count_equal_to(value)
    }

    // =========================================================================
    // Transaction operations
    // =========================================================================

    /// Open a new, possibly nested, transaction block
    pub fn begin(&mut self) {
        self.transactions.begin();
        debug!(depth = self.transactions.depth(), "begin");
    }

    /// Undo the innermost block and close it
    ///
    /// Returns `false` if no transaction is open.
    pub fn rollback(&mut self) -> bool {
        let Some(frame) = self.transactions.pop() else {
            debug!("rollback with no transaction");
            return false;
        };
        debug!(
            restored = frame.len(),
            depth = self.transactions.depth(),
            "rollback"
        );
        frame.apply(&mut self.store);
        true
    }

    /// Close every open block, keeping the current data
    ///
    /// Returns `false` if no transaction is open.
    pub fn commit(&mut self) -> bool {
        if self.transactions.is_empty() {
            debug!("commit with no transaction");
            return false;
        }
        let closed = self.transactions.clear();
        debug!(closed, "commit");
        true
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of open transaction blocks
    pub fn depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Check if a transaction is open
    pub fn in_transaction(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Number of keys set
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if no key is set
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Read-only view of the store
    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Read-only view of the frequency index
    pub fn index(&self) -> &FrequencyIndex {
        self.store.index()
    }

    /// Read-only view of the transaction stack
    pub fn transactions(&self) -> &TransactionStack {
        &self.transactions
    }
}

/// Builder for [`Database`]
#[derive(Debug, Clone, Default)]
pub struct DatabaseBuilder {
    capacity: Option<usize>,
}

impl DatabaseBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the store for about `capacity` keys
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build the database
    pub fn build(self) -> Database {
        let store = match self.capacity {
            Some(capacity) => KvStore::with_capacity(capacity),
            None => KvStore::new(),
        };
        Database {
            store,
            transactions: TransactionStack::new(),
        }
    }
}
