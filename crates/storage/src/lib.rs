//! Storage layer for nestkv
//!
//! This crate implements the in-memory data structures behind the engine:
//! - FrequencyIndex: reverse index from value to the number of keys holding it
//! - KvStore: key → value map that keeps the frequency index in step
//!
//! Neither type knows about transactions. The engine layers undo frames on
//! top and uses [`KvStore::restore`] to apply them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod store;

pub use index::FrequencyIndex;
pub use store::KvStore;
