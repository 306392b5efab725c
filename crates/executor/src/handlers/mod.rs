//! Command handlers, grouped by area.
//!
//! Each handler takes the database and the command's arguments and returns
//! an [`Output`](crate::Output).

pub mod kv;
pub mod txn;
