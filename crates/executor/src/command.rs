//! Command enum, one variant per verb.

use nestkv_core::{Key, Value};
use std::fmt;

/// A parsed command
///
/// Every verb the interpreter understands has exactly one variant. The
/// executor matches on this exhaustively, so adding a verb is a compile
/// error until it is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `SET key value`
    Set {
        /// Key to write
        key: Key,
        /// Value to store
        value: Value,
    },
    /// `GET key`
    Get {
        /// Key to read
        key: Key,
    },
    /// `UNSET key`
    Unset {
        /// Key to remove
        key: Key,
    },
    /// `NUMEQUALTO value`
    NumEqualTo {
        /// Value to count
        value: Value,
    },
    /// `BEGIN`
    Begin,
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
    /// `END`
    End,
}

impl Command {
    /// The verb as written on the command line
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::NumEqualTo { .. } => "NUMEQUALTO",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
            Command::End => "END",
        }
    }

    /// Whether this command can change stored data or transaction depth
    pub fn is_write(&self) -> bool {
        !matches!(
            self,
            Command::Get { .. } | Command::NumEqualTo { .. } | Command::End
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Set { key, value } => write!(f, "SET {} {}", key, value),
            Command::Get { key } => write!(f, "GET {}", key),
            Command::Unset { key } => write!(f, "UNSET {}", key),
            Command::NumEqualTo { value } => write!(f, "NUMEQUALTO {}", value),
            other => f.write_str(other.verb()),
        }
    }
}
