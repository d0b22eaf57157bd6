use crate::board::{Board, BoardError, Environment, PendingWrite, SubmitOutcome};
use proto::{ScoreEntry, C2S, S2C};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct MockEnv {
    time_ms: Rc<Cell<u64>>,
    logs: Rc<RefCell<Vec<String>>>,
}

impl MockEnv {
    fn new() -> Self {
        Self {
            time_ms: Rc::new(Cell::new(1000)),
            logs: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Environment for MockEnv {
    fn now(&self) -> u64 {
        self.time_ms.get()
    }
    fn log(&self, msg: String) {
        self.logs.borrow_mut().push(msg);
    }
}

const ALICE: &str = "aliceAAAA1";
const BOB: &str = "bobBBBBBB2";
const CAROL: &str = "carolCCCC3";

fn board() -> (Board, Rc<Cell<u64>>) {
    let env = MockEnv::new();
    let clock = env.time_ms.clone();
    (Board::new(Box::new(env)), clock)
}

/// Submit and commit, as the Durable Object does after a successful write
fn store(b: &mut Board, user_id: &str, name: &str, score: u32) -> SubmitOutcome {
    let outcome = b.submit(user_id, name, score).unwrap();
    if let SubmitOutcome::Stored { entry, .. } = &outcome {
        assert!(b.commit(entry.clone()));
    }
    outcome
}

#[test]
fn test_first_submit_is_stored() {
    let (mut b, _) = board();

    let outcome = b.submit(ALICE, "Alice", 6).unwrap();

    let entry = match outcome {
        SubmitOutcome::Stored { entry, previous } => {
            assert_eq!(previous, None);
            assert_eq!(entry.score, 6);
            assert_eq!(entry.id, ALICE);
            assert_eq!(entry.timestamp, 1000);
            entry
        }
        other => panic!("expected Stored, got {:?}", other),
    };
    assert_eq!(b.best(ALICE), None, "not visible until committed");

    assert!(b.commit(entry));
    assert_eq!(b.best(ALICE), Some(6));
}

#[test]
fn test_higher_score_replaces_best() {
    let (mut b, clock) = board();
    store(&mut b, ALICE, "Alice", 6);
    clock.set(5000);

    let outcome = store(&mut b, ALICE, "Alice", 10);

    assert!(matches!(
        outcome,
        SubmitOutcome::Stored {
            previous: Some(6),
            ..
        }
    ));
    let top = b.top(10);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].score, 10);
    assert_eq!(top[0].timestamp, 5000);
}

#[test]
fn test_equal_score_is_not_written() {
    let (mut b, clock) = board();
    store(&mut b, ALICE, "Alice", 8);
    clock.set(9000);

    let outcome = b.submit(ALICE, "Renamed", 8).unwrap();

    assert_eq!(outcome, SubmitOutcome::Kept { best: 8 });
    let top = b.top(1);
    assert_eq!(top[0].player_name, "Alice");
    assert_eq!(top[0].timestamp, 1000);
}

#[test]
fn test_lower_score_is_not_written() {
    let (mut b, _) = board();
    store(&mut b, ALICE, "Alice", 12);

    assert_eq!(
        b.submit(ALICE, "Alice", 4).unwrap(),
        SubmitOutcome::Kept { best: 12 }
    );
    assert_eq!(b.best(ALICE), Some(12));
}

#[test]
fn test_invalid_submissions_rejected() {
    let (b, _) = board();
    assert_eq!(
        b.submit("bad id!", "x", 4),
        Err(BoardError::InvalidUserId)
    );
    assert_eq!(b.submit(ALICE, "Alice", 0), Err(BoardError::EmptyScore));
    assert!(b.is_empty());
}

#[test]
fn test_top_is_ranked_and_limited() {
    let (mut b, clock) = board();
    store(&mut b, ALICE, "Alice", 4);
    clock.set(2000);
    store(&mut b, BOB, "Bob", 14);
    clock.set(3000);
    store(&mut b, CAROL, "Carol", 8);

    let all = b.top(10);
    let scores: Vec<u32> = all.iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![14, 8, 4]);

    let top2 = b.top(2);
    assert_eq!(top2.len(), 2);
    assert_eq!(top2[0].user_id, BOB);
}

#[test]
fn test_from_entries_keeps_highest_duplicate() {
    let stored = vec![
        ScoreEntry::new(ALICE, "Alice", 6, 1),
        ScoreEntry::new(ALICE, "Alice", 10, 2),
        ScoreEntry::new(ALICE, "Alice", 8, 3),
        ScoreEntry::new(BOB, "Bob", 2, 4),
    ];

    let b = Board::from_entries(Box::new(MockEnv::new()), stored);

    assert_eq!(b.len(), 2);
    assert_eq!(b.best(ALICE), Some(10));
}

#[test]
fn test_handle_submit_produces_write_for_new_user() {
    let (mut b, _) = board();

    let (reply, write) = b.handle(C2S::SubmitScore {
        user_id: ALICE.to_string(),
        player_name: "  Alice  ".to_string(),
        score: 4,
    });

    let write: PendingWrite = write.expect("new best must be persisted");
    assert!(write.new_user);
    assert_eq!(write.entry.player_name, "Alice");
    assert!(matches!(reply, S2C::ScoreAccepted { previous: None, .. }));
    b.commit(write.entry);

    let (_, write) = b.handle(C2S::SubmitScore {
        user_id: ALICE.to_string(),
        player_name: "Alice".to_string(),
        score: 6,
    });
    assert!(!write.unwrap().new_user);
}

#[test]
fn test_handle_kept_score_has_no_write() {
    let (mut b, _) = board();
    store(&mut b, ALICE, "Alice", 6);

    let (reply, write) = b.handle(C2S::SubmitScore {
        user_id: ALICE.to_string(),
        player_name: "Alice".to_string(),
        score: 6,
    });

    assert_eq!(reply, S2C::ScoreKept { best: 6 });
    assert!(write.is_none());
}

#[test]
fn test_handle_invalid_submit_replies_error() {
    let (b, _) = board();
    let (reply, write) = b.handle(C2S::SubmitScore {
        user_id: "x".to_string(),
        player_name: "x".to_string(),
        score: 4,
    });
    assert!(matches!(reply, S2C::Error { .. }));
    assert!(write.is_none());
}

#[test]
fn test_handle_fetch_best() {
    let (mut b, _) = board();
    store(&mut b, BOB, "Bob", 2);

    let (reply, _) = b.handle(C2S::FetchBest {
        user_id: BOB.to_string(),
    });
    assert_eq!(reply, S2C::Best { score: Some(2) });

    let (reply, _) = b.handle(C2S::FetchBest {
        user_id: ALICE.to_string(),
    });
    assert_eq!(reply, S2C::Best { score: None });
}

#[test]
fn test_handle_leaderboard_zero_limit_uses_default() {
    let (mut b, _) = board();
    for i in 0..15u32 {
        store(&mut b, &format!("user{:06}", i), "p", (i + 1) * 2);
    }

    let (reply, _) = b.handle(C2S::FetchLeaderboard { limit: 0 });

    match reply {
        S2C::Leaderboard { entries } => {
            assert_eq!(entries.len(), proto::DEFAULT_LEADERBOARD_LIMIT as usize);
            assert_eq!(entries[0].score, 30);
            assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
        }
        other => panic!("expected Leaderboard, got {:?}", other),
    }
}

#[test]
fn test_new_best_is_logged() {
    let env = MockEnv::new();
    let logs = env.logs.clone();
    let mut b = Board::new(Box::new(env));

    store(&mut b, ALICE, "Alice", 2);

    assert_eq!(logs.borrow().len(), 1);
    assert!(logs.borrow()[0].contains(ALICE));
}

#[test]
fn test_failed_write_leaves_best_unchanged() {
    let (mut b, _) = board();
    store(&mut b, ALICE, "Alice", 4);

    let submit = |score| C2S::SubmitScore {
        user_id: ALICE.to_string(),
        player_name: "Alice".to_string(),
        score,
    };

    // Storage rejects the write for 10, so it is never committed
    let (_, write) = b.handle(submit(10));
    assert!(write.is_some());
    assert_eq!(b.best(ALICE), Some(4));
    let (best, _) = b.handle(C2S::FetchBest {
        user_id: ALICE.to_string(),
    });
    assert_eq!(best, S2C::Best { score: Some(4) });

    let (reply, write) = b.handle(submit(8));

    assert!(matches!(reply, S2C::ScoreAccepted { previous: Some(4), .. }));
    let write = write.expect("8 beats the stored 4");
    assert_eq!(write.entry.score, 8);
    assert!(!write.new_user);
}

#[test]
fn test_stale_commit_is_ignored() {
    let (mut b, _) = board();
    let first = match b.submit(ALICE, "Alice", 6).unwrap() {
        SubmitOutcome::Stored { entry, .. } => entry,
        other => panic!("expected Stored, got {:?}", other),
    };
    store(&mut b, ALICE, "Alice", 10);

    assert!(!b.commit(first));
    assert_eq!(b.best(ALICE), Some(10));
}
