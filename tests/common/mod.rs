//! Shared helpers for integration tests.

#![allow(dead_code)]

pub use nestkv::prelude::*;

/// Fresh empty database.
pub fn create_db() -> Database {
    Database::new()
}

/// Fresh executor over an empty database.
pub fn create_executor() -> Executor {
    Executor::new(Database::new())
}

/// Current value of `key` as a string slice.
pub fn get<'a>(db: &'a Database, key: &str) -> Option<&'a str> {
    db.get(key).map(|v| v.as_str())
}

/// Assert that the frequency index matches the store exactly.
pub fn assert_index_consistent(db: &Database) {
    assert_eq!(
        db.index().total(),
        db.len(),
        "sum of counts must equal number of keys"
    );
    for (value, count) in db.index().iter() {
        let actual = db.store().iter().filter(|(_, v)| *v == value).count();
        assert_eq!(count, actual, "count mismatch for value {}", value);
    }
}

/// Run `lines` through an executor and collect the protocol text of every
/// printed response, stopping at END.
pub fn run_script(executor: &mut Executor, lines: &[&str]) -> Vec<String> {
    let mut printed = Vec::new();
    for line in lines {
        match executor.execute_line(line) {
            Ok(Output::End) => break,
            Ok(Output::Maybe(Some(v))) => printed.push(v.to_string()),
            Ok(Output::Maybe(None)) => printed.push("NULL".to_string()),
            Ok(Output::Count(n)) => printed.push(n.to_string()),
            Ok(Output::Unit) => {}
            Err(e) => printed.push(e.to_string()),
        }
    }
    printed
}
