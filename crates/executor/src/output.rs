//! Command results.

use nestkv_core::Value;

/// Result of executing a [`Command`](crate::Command)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// No response (SET, UNSET, BEGIN, successful ROLLBACK/COMMIT)
    Unit,
    /// Value read by GET; `None` when the key is unset
    Maybe(Option<Value>),
    /// Count returned by NUMEQUALTO
    Count(usize),
    /// END was received; the caller must stop reading input
    End,
}

impl Output {
    /// Whether the caller should stop processing input
    pub fn is_end(&self) -> bool {
        matches!(self, Output::End)
    }
}
