//! Stack of open transaction blocks

use super::frame::UndoFrame;
use nestkv_core::Key;
use nestkv_storage::KvStore;

/// LIFO stack of undo frames
///
/// Depth 0 means no transaction is open. Each `begin` pushes a frame;
/// `pop` hands the innermost frame back for rollback; `clear` drops every
/// frame for commit.
#[derive(Debug, Default)]
pub struct TransactionStack {
    frames: Vec<UndoFrame>,
}

impl TransactionStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new block
    pub fn begin(&mut self) {
        self.frames.push(UndoFrame::new());
    }

    /// Number of open blocks
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if no block is open
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Innermost open frame
    pub fn top(&self) -> Option<&UndoFrame> {
        self.frames.last()
    }

    /// Capture `key`'s current state from `store` into the innermost frame
    ///
    /// Does nothing outside a transaction or when the innermost frame has
    /// already captured `key`. Returns `true` if a state was recorded.
    pub fn capture(&mut self, key: &Key, store: &KvStore) -> bool {
        match self.frames.last_mut() {
            Some(frame) => frame.capture(key, || store.state_of(key.as_str())),
            None => false,
        }
    }

    /// Close the innermost block and return its frame
    pub fn pop(&mut self) -> Option<UndoFrame> {
        self.frames.pop()
    }

    /// Close every open block without replaying any of them
    ///
    /// Returns the number of frames discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.frames.len();
        self.frames.clear();
        discarded
    }
}
