//! Command Dispatch Tests
//!
//! Tests that the Executor correctly dispatches all Command variants
//! and returns the appropriate Output types.

use crate::common::*;

// ============================================================================
// Data Commands
// ============================================================================

#[test]
fn set_then_get_returns_value() {
    let mut executor = create_executor();

    let output = executor
        .execute(Command::Set {
            key: "k".into(),
            value: "v".into(),
        })
        .unwrap();
    assert_eq!(output, Output::Unit);

    let output = executor.execute(Command::Get { key: "k".into() }).unwrap();
    match output {
        Output::Maybe(Some(val)) => assert_eq!(val, Value::from("v")),
        _ => panic!("Expected Maybe(Some) output"),
    }
}

#[test]
fn get_missing_returns_none() {
    let mut executor = create_executor();
    let output = executor
        .execute(Command::Get {
            key: "nonexistent".into(),
        })
        .unwrap();
    assert!(matches!(output, Output::Maybe(None)));
}

#[test]
fn num_equal_to_returns_count() {
    let mut executor = create_executor();
    executor.execute_line("SET a 5").unwrap();
    executor.execute_line("SET b 5").unwrap();
    executor.execute_line("SET c 6").unwrap();

    let output = executor
        .execute(Command::NumEqualTo { value: "5".into() })
        .unwrap();
    assert_eq!(output, Output::Count(2));
}

// ============================================================================
// Transaction Commands
// ============================================================================

#[test]
fn rollback_without_transaction_returns_no_transaction() {
    let mut executor = create_executor();
    let err = executor.execute(Command::Rollback).unwrap_err();
    assert!(err.is_no_transaction());
}

#[test]
fn commit_without_transaction_returns_no_transaction() {
    let mut executor = create_executor();
    let err = executor.execute(Command::Commit).unwrap_err();
    assert!(matches!(err, Error::NoTransaction));
}

#[test]
fn begin_returns_unit_and_opens_block() {
    let mut executor = create_executor();
    assert_eq!(executor.execute(Command::Begin).unwrap(), Output::Unit);
    assert!(executor.database().in_transaction());
}

#[test]
fn end_returns_end() {
    let mut executor = create_executor();
    assert!(executor.execute(Command::End).unwrap().is_end());
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_line_builds_every_variant() {
    let cases = [
        ("SET a 1", "SET"),
        ("GET a", "GET"),
        ("UNSET a", "UNSET"),
        ("NUMEQUALTO 1", "NUMEQUALTO"),
        ("BEGIN", "BEGIN"),
        ("ROLLBACK", "ROLLBACK"),
        ("COMMIT", "COMMIT"),
        ("END", "END"),
    ];
    for (line, verb) in cases {
        assert_eq!(parse_line(line).unwrap().verb(), verb);
    }
}

#[test]
fn malformed_lines_never_reach_engine() {
    let mut executor = create_executor();
    for line in ["SET", "SET a", "GET", "UNSET", "NUMEQUALTO", "", "PUT a 1"] {
        assert!(executor.execute_line(line).unwrap_err().is_parse_error());
    }
    assert!(executor.database().is_empty());
    assert_eq!(executor.database().depth(), 0);
}
