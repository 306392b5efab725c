//! Transcript tests: scripts of protocol lines and the responses they print.

use crate::common::*;

#[test]
fn count_transcript() {
    let mut executor = create_executor();
    let printed = run_script(
        &mut executor,
        &[
            "SET a 10",
            "GET a",
            "SET b 10",
            "NUMEQUALTO 10",
            "UNSET a",
            "NUMEQUALTO 10",
            "END",
        ],
    );
    assert_eq!(printed, vec!["10", "2", "1"]);
}

#[test]
fn nested_transaction_transcript() {
    let mut executor = create_executor();
    let printed = run_script(
        &mut executor,
        &[
            "BEGIN",
            "SET a 10",
            "GET a",
            "BEGIN",
            "SET a 20",
            "GET a",
            "ROLLBACK",
            "GET a",
            "ROLLBACK",
            "GET a",
            "END",
        ],
    );
    assert_eq!(printed, vec!["10", "20", "10", "NULL"]);
}

#[test]
fn commit_transcript() {
    let mut executor = create_executor();
    let printed = run_script(
        &mut executor,
        &[
            "BEGIN",
            "SET a 30",
            "BEGIN",
            "SET a 40",
            "COMMIT",
            "GET a",
            "ROLLBACK",
            "END",
        ],
    );
    assert_eq!(printed, vec!["40", "NO TRANSACTION"]);
}

#[test]
fn unset_inside_transactions_transcript() {
    let mut executor = create_executor();
    let printed = run_script(
        &mut executor,
        &[
            "SET a 10",
            "BEGIN",
            "NUMEQUALTO 10",
            "BEGIN",
            "UNSET a",
            "NUMEQUALTO 10",
            "ROLLBACK",
            "NUMEQUALTO 10",
            "COMMIT",
            "END",
        ],
    );
    assert_eq!(printed, vec!["1", "0", "1"]);
}

#[test]
fn error_lines_transcript() {
    let mut executor = create_executor();
    let printed = run_script(&mut executor, &["", "FETCH a", "COMMIT", "END", "GET a"]);
    assert_eq!(
        printed,
        vec!["No command", "Invalid command FETCH", "NO TRANSACTION"]
    );
}
