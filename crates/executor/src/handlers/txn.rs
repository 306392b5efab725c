//! Transaction command handlers: BEGIN, ROLLBACK, COMMIT.

use nestkv_engine::Database;

use crate::{Error, Output, Result};

/// Handle BEGIN command.
pub fn txn_begin(db: &mut Database) -> Result<Output> {
    db.begin();
    Ok(Output::Unit)
}

/// Handle ROLLBACK command.
pub fn txn_rollback(db: &mut Database) -> Result<Output> {
    if db.rollback() {
        Ok(Output::Unit)
    } else {
        Err(Error::NoTransaction)
    }
}

/// Handle COMMIT command.
pub fn txn_commit(db: &mut Database) -> Result<Output> {
    if db.commit() {
        Ok(Output::Unit)
    } else {
        Err(Error::NoTransaction)
    }
}
