//! Command executor.

use nestkv_engine::Database;
use tracing::trace;

use crate::handlers::{kv, txn};
use crate::{parse_line, Command, Output, Result};

/// Runs commands against a database it owns
///
/// The executor is the only path from textual commands into the engine.
/// It owns the [`Database`] outright; callers that need to inspect state
/// use [`Executor::database`].
#[derive(Debug, Default)]
pub struct Executor {
    db: Database,
}

impl Executor {
    /// Create an executor over `db`
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Read-only access to the database
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Give the database back
    pub fn into_database(self) -> Database {
        self.db
    }

    /// Execute one command
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTransaction`](crate::Error::NoTransaction) when
    /// ROLLBACK or COMMIT runs with no open transaction.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        trace!(verb = cmd.verb(), write = cmd.is_write(), "execute");
        match cmd {
            Command::Set { key, value } => kv::kv_set(&mut self.db, key, value),
            Command::Get { key } => kv::kv_get(&self.db, &key),
            Command::Unset { key } => kv::kv_unset(&mut self.db, &key),
            Command::NumEqualTo { value } => kv::kv_num_equal_to(&self.db, &value),
            Command::Begin => txn::txn_begin(&mut self.db),
            Command::Rollback => txn::txn_rollback(&mut self.db),
            Command::Commit => txn::txn_commit(&mut self.db),
            Command::End => Ok(Output::End),
        }
    }

    /// Parse and execute one input line
    pub fn execute_line(&mut self, line: &str) -> Result<Output> {
        let cmd = parse_line(line)?;
        self.execute(cmd)
    }
}
