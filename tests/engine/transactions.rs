//! Nested transaction tests.

use crate::common::*;

// ============================================================================
// Depth state machine
// ============================================================================

#[test]
fn rollback_and_commit_fail_with_no_transaction() {
    let mut db = create_db();
    assert!(!db.rollback());
    assert!(!db.commit());
}

#[test]
fn depth_follows_begin_rollback_commit() {
    let mut db = create_db();
    db.begin();
    db.begin();
    db.begin();
    assert_eq!(db.depth(), 3);

    assert!(db.rollback());
    assert_eq!(db.depth(), 2);

    assert!(db.commit());
    assert_eq!(db.depth(), 0);
    assert!(!db.in_transaction());
}

#[test]
fn data_operations_do_not_change_depth() {
    let mut db = create_db();
    db.begin();
    db.set("a", "1");
    db.unset("a");
    db.get("a");
    db.count_equal_to("1");
    assert_eq!(db.depth(), 1);
}

// ============================================================================
// Rollback
// ============================================================================

#[test]
fn first_write_wins_restores_absent_key() {
    let mut db = create_db();
    db.begin();
    db.set("a", "1");
    db.set("a", "2");
    assert!(db.rollback());

    assert_eq!(get(&db, "a"), None);
}

#[test]
fn nested_rollback_unwinds_one_level_at_a_time() {
    let mut db = create_db();
    db.set("a", "1");
    db.begin();
    db.set("a", "2");
    db.begin();
    db.set("a", "3");

    assert!(db.rollback());
    assert_eq!(get(&db, "a"), Some("2"));

    assert!(db.rollback());
    assert_eq!(get(&db, "a"), Some("1"));

    assert!(!db.rollback());
    assert_eq!(get(&db, "a"), Some("1"));
}

#[test]
fn rollback_restores_keys_unset_inside_block() {
    let mut db = create_db();
    db.set("a", "10");
    db.begin();
    db.unset("a");
    assert_eq!(get(&db, "a"), None);

    assert!(db.rollback());
    assert_eq!(get(&db, "a"), Some("10"));
}

#[test]
fn inner_rollback_keeps_outer_changes() {
    let mut db = create_db();
    db.begin();
    db.set("outer", "x");
    db.begin();
    db.set("inner", "y");
    db.set("outer", "z");

    assert!(db.rollback());
    assert_eq!(get(&db, "outer"), Some("x"));
    assert_eq!(get(&db, "inner"), None);
    assert_eq!(db.depth(), 1);
}

#[test]
fn key_untouched_in_inner_block_survives_inner_rollback() {
    let mut db = create_db();
    db.begin();
    db.set("a", "1");
    db.begin();
    db.set("b", "2");
    assert!(db.rollback());

    assert_eq!(get(&db, "a"), Some("1"));
    assert!(db.rollback());
    assert_eq!(get(&db, "a"), None);
}

#[test]
fn empty_value_is_distinct_from_unset() {
    let mut db = create_db();
    db.set("a", "");
    db.begin();
    db.set("a", "full");
    assert!(db.rollback());

    assert_eq!(get(&db, "a"), Some(""));
    assert_eq!(db.count_equal_to(""), 1);
}

#[test]
fn unset_absent_inside_transaction_records_nothing() {
    let mut db = create_db();
    db.begin();
    db.unset("a");
    assert!(db.transactions().top().unwrap().is_empty());

    // Setting afterwards still captures Absent as the prior state
    db.set("a", "1");
    assert_eq!(
        db.transactions().top().unwrap().prior_state("a"),
        Some(&PriorState::Absent)
    );
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn cascading_commit_closes_every_block() {
    let mut db = create_db();
    db.begin();
    db.set("a", "1");
    db.begin();
    db.set("a", "2");

    assert!(db.commit());
    assert_eq!(get(&db, "a"), Some("2"));
    assert_eq!(db.depth(), 0);
    assert!(!db.rollback());
}

#[test]
fn commit_then_new_transaction_rolls_back_to_committed_state() {
    let mut db = create_db();
    db.begin();
    db.set("a", "1");
    assert!(db.commit());

    db.begin();
    db.set("a", "2");
    assert!(db.rollback());
    assert_eq!(get(&db, "a"), Some("1"));
}
