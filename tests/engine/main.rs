//! Engine Integration Tests
//!
//! Tests for nestkv-engine: data operations, nested transactions and the
//! frequency index invariant.

#[path = "../common/mod.rs"]
mod common;

mod transactions;
