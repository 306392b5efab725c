//! # nestkv
//!
//! In-memory key-value store with nested transactions and value counting.
//!
//! ## Quick Start
//!
//! ```
//! use nestkv::prelude::*;
//!
//! let mut db = Database::new();
//! db.set("a", "10");
//! db.set("b", "10");
//! assert_eq!(db.count_equal_to("10"), 2);
//!
//! db.begin();
//! db.unset("a");
//! assert_eq!(db.count_equal_to("10"), 1);
//! db.rollback();
//! assert_eq!(db.count_equal_to("10"), 2);
//! ```
//!
//! ## Layers
//!
//! - [`storage`] - key-value map and value frequency index
//! - [`engine`] - nested undo frames and the [`Database`] façade
//! - [`executor`] - textual commands, [`Command`]/[`Output`] and [`Executor`]
//!
//! ## Transactions
//!
//! `begin` opens a block; blocks nest. `rollback` undoes the innermost block
//! only. `commit` closes every open block at once and keeps the current data.
//! Both return `false` when no block is open.

#![warn(missing_docs)]

pub mod prelude;

pub use nestkv_core as types;
pub use nestkv_engine as engine;
pub use nestkv_executor as executor;
pub use nestkv_storage as storage;

// Re-export main entry points
pub use nestkv_engine::{Database, DatabaseBuilder};
pub use nestkv_executor::{parse_line, Command, Error, Executor, Output, Result};

// Re-export types
pub use nestkv_core::{Key, PriorState, Value};
