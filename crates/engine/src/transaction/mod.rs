//! Nested transaction support
//!
//! This module provides:
//! - [`UndoFrame`]: per-block record of each key's state before the block touched it
//! - [`TransactionStack`]: LIFO stack of open frames, one per `BEGIN`
//!
//! # Capture rule
//!
//! A frame records a key's prior state on the key's first mutation inside
//! that block only. Later writes to the same key in the same block leave the
//! captured state alone, so rolling the frame back lands on exactly the
//! state seen at `BEGIN`.
//!
//! Frames are independent: a key touched in both an outer and an inner block
//! is captured once in each.

pub mod frame;
pub mod stack;

pub use frame::UndoFrame;
pub use stack::TransactionStack;
