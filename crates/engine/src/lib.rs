//! Transactional engine for nestkv
//!
//! This crate composes the storage layer with nested transactions:
//! - [`Database`]: the engine façade (set/get/unset/count, begin/rollback/commit)
//! - [`TransactionStack`] and [`UndoFrame`]: the nested undo log
//!
//! Rollback and commit report "no transaction" by returning `false`; every
//! other operation is total.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod transaction;

pub use database::{Database, DatabaseBuilder};
pub use transaction::{TransactionStack, UndoFrame};

pub use nestkv_core::{Key, PriorState, Value};
