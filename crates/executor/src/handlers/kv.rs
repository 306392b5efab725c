//! Data command handlers: SET, GET, UNSET, NUMEQUALTO.

use nestkv_core::{Key, Value};
use nestkv_engine::Database;

use crate::{Output, Result};

/// Handle SET command.
pub fn kv_set(db: &mut Database, key: Key, value: Value) -> Result<Output> {
    db.set(key, value);
    Ok(Output::Unit)
}

/// Handle GET command.
pub fn kv_get(db: &Database, key: &Key) -> Result<Output> {
    Ok(Output::Maybe(db.get(key.as_str()).cloned()))
}

/// Handle UNSET command.
pub fn kv_unset(db: &mut Database, key: &Key) -> Result<Output> {
    db.unset(key.as_str());
    Ok(Output::Unit)
}

/// Handle NUMEQUALTO command.
pub fn kv_num_equal_to(db: &Database, value: &Value) -> Result<Output> {
    Ok(Output::Count(db.count_equal_to(value.as_str())))
}
