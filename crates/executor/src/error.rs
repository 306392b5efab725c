//! Interpreter error type.
//!
//! The `Display` text of each variant is exactly what the command line
//! prints for it.

use thiserror::Error;

/// Errors produced while parsing or executing a command
#[derive(Debug, Error)]
pub enum Error {
    /// The line held no tokens
    #[error("No command")]
    EmptyCommand,

    /// The verb is not one the interpreter knows
    #[error("Invalid command {0}")]
    UnknownCommand(String),

    /// A required argument was not supplied
    #[error("Missing argument {argument} for {command}")]
    MissingArgument {
        /// Verb being parsed
        command: &'static str,
        /// Name of the missing argument
        argument: &'static str,
    },

    /// ROLLBACK or COMMIT with no open transaction
    #[error("NO TRANSACTION")]
    NoTransaction,

    /// Reading commands or writing responses failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is the "no transaction in progress" condition
    pub fn is_no_transaction(&self) -> bool {
        matches!(self, Error::NoTransaction)
    }

    /// Check if the input line itself was rejected
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyCommand | Error::UnknownCommand(_) | Error::MissingArgument { .. }
        )
    }
}
