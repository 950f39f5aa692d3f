// eternal_quest.rs — End-to-end run of a ledger through a full session.
//
// Creates one goal of each kind, records a long run of events, checks the
// score and completion marks, then saves to disk, reloads into a fresh
// ledger, and keeps playing on the restored copy.

use std::fs;

use tempfile::tempdir;

use quest_ledger::{GoalLedger, GoalState, LedgerError, LedgerStore, NewGoal};

fn scripture_ledger() -> GoalLedger {
    let mut ledger = GoalLedger::new();
    ledger
        .create_goal(NewGoal::new("SimpleGoal", "Read", "Read scripture", 100))
        .unwrap();
    ledger
        .create_goal(NewGoal::new("EternalGoal", "Pray", "Pray daily", 5))
        .unwrap();
    ledger
        .create_goal(
            NewGoal::new("ChecklistGoal", "Attend", "Attend temple", 50).with_checklist(10, 100),
        )
        .unwrap();
    ledger
}

#[test]
fn attend_ten_times_then_read_and_pray_scores_705() {
    let mut ledger = scripture_ledger();

    // Attend ten times, then Read and Pray once each.
    let mut earned = Vec::new();
    for _ in 0..10 {
        earned.push(ledger.record_event(3).unwrap());
    }
    ledger.record_event(1).unwrap();
    ledger.record_event(2).unwrap();

    assert_eq!(&earned[..9], &[50; 9]);
    assert_eq!(earned[9], 150);
    assert_eq!(ledger.current_score(), 705);

    let listed = ledger.list_goals();
    assert!(listed[0].1.starts_with("[X] Read"));
    assert!(listed[1].1.starts_with("[ ] Pray"));
    assert!(listed[2].1.starts_with("[X] Attend"));
    assert!(listed[2].1.ends_with("Completed 10/10"));

    assert_eq!(ledger.goal(1).unwrap().state(), GoalState::Complete);
    assert_eq!(ledger.goal(2).unwrap().state(), GoalState::Perpetual);
    assert_eq!(ledger.goal(3).unwrap().state(), GoalState::Complete);
}

#[test]
fn interleaved_rounds_award_points_on_every_event() {
    let mut ledger = scripture_ledger();
    let mut total = 0;
    for _ in 0..10 {
        for position in 1..=3 {
            total += ledger.record_event(position).unwrap();
        }
    }
    // Read pays 100 every round even once complete.
    assert_eq!(total, 100 * 10 + 5 * 10 + 50 * 10 + 100);
    assert_eq!(ledger.current_score(), total);
}

#[test]
fn saved_session_resumes_where_it_left_off() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("goals.txt"));

    let mut ledger = scripture_ledger();
    ledger.record_event(1).unwrap();
    for _ in 0..9 {
        ledger.record_event(3).unwrap();
    }
    store.save(&ledger).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "550",
            "SimpleGoal|Read|Read scripture|100|True",
            "EternalGoal|Pray|Pray daily|5",
            "ChecklistGoal|Attend|Attend temple|50|9|10|100",
        ]
    );

    let mut resumed = GoalLedger::new();
    let report = store.load_into(&mut resumed).unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(resumed, ledger);

    // The tenth attendance still earns the bonus after the reload.
    assert_eq!(resumed.record_event(3).unwrap(), 150);
    assert_eq!(resumed.current_score(), 700);
}

#[test]
fn hand_edited_file_loads_what_it_can() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("goals.txt");
    fs::write(
        &path,
        "30\n\
         ChecklistGoal|Run|Run a 5k|10|2|3|50\n\
         ChecklistGoal|Swim|Swim laps|10|2\n\
         BucketGoal|Everest|Climb it|1000\n",
    )
    .unwrap();

    let mut ledger = GoalLedger::new();
    let report = LedgerStore::new(&path).load_into(&mut ledger).unwrap();
    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(ledger.current_score(), 30);
    assert_eq!(
        ledger.list_goals(),
        vec![(1, "[ ] Run (Run a 5k) -- Completed 2/3".to_string())]
    );

    assert_eq!(ledger.record_event(1).unwrap(), 60);
    assert!(matches!(
        ledger.record_event(2),
        Err(LedgerError::IndexOutOfRange { position: 2, len: 1 })
    ));
    assert_eq!(ledger.current_score(), 90);
}
