//! Core types for nestkv
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`Key`]: opaque token naming a stored variable
//! - [`Value`]: opaque token stored under a key
//! - [`PriorState`]: a key's state captured before a transaction block mutated it

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;

pub use types::{Key, PriorState, Value};
