///! Tests for the bid status transition rules. Pure logic — no running
///! server or database is needed.
///!
///! Run with: `cargo test --test status_test`
use jobsphere_backend::models::bids::BidStatus;

use BidStatus::{Completed, InProgress, Pending, Rejected};

const ALL: [BidStatus; 4] = [Pending, InProgress, Rejected, Completed];

#[test]
fn test_full_transition_table() {
    // The only permitted moves, as (current, requested) pairs.
    let allowed = [
        (Pending, InProgress),
        (Pending, Rejected),
        (InProgress, Rejected),
        (InProgress, Completed),
        (Rejected, InProgress),
    ];

    for current in &ALL {
        for requested in &ALL {
            let expected = allowed
                .iter()
                .any(|(c, r)| c == current && r == requested);
            assert_eq!(
                current.permits_transition_to(requested),
                expected,
                "transition {current:?} -> {requested:?}"
            );
        }
    }
}

#[test]
fn test_in_progress_succeeds_once() {
    assert!(Pending.permits_transition_to(&InProgress));
    // A second attempt from In Progress is a no-op request and fails.
    assert!(!InProgress.permits_transition_to(&InProgress));
}

#[test]
fn test_completed_is_terminal() {
    for requested in &ALL {
        assert!(
            !Completed.permits_transition_to(requested),
            "Completed -> {requested:?} must be refused"
        );
    }
}

#[test]
fn test_reject_rules() {
    assert!(Pending.permits_transition_to(&Rejected));
    assert!(InProgress.permits_transition_to(&Rejected));
    assert!(!Rejected.permits_transition_to(&Rejected));
}

#[test]
fn test_rejected_bid_can_be_reaccepted() {
    assert!(Rejected.permits_transition_to(&InProgress));
    assert!(!Rejected.permits_transition_to(&Completed));
}

#[test]
fn test_nothing_reenters_pending() {
    for current in &ALL {
        assert!(!current.permits_transition_to(&Pending));
    }
}

#[test]
fn test_completion_requires_in_progress() {
    assert!(!Pending.permits_transition_to(&Completed));
    assert!(InProgress.permits_transition_to(&Completed));
}
