//! Integration tests for the on-disk record.
//!
//! A real SQLite file in a temp directory, written and re-read the way
//! the CLI does it: load, mutate through the session, save, reopen.

use focusshield_core::{Session, Snapshot, Store};
use tempfile::TempDir;

const T0: u64 = 1_700_000_000_000;

#[test]
fn record_survives_a_store_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = Store::open_at(dir.path()).unwrap();
        let mut session = Session::with_seed(store.load_snapshot(), T0, 1);
        session.toggle_run(T0);
        session.poll(T0 + 30_000);
        session.add_checklist_item("water the plants");
        session.toggle_checklist_item("water the plants");
        session.cloud_mut().project = "shield-prod".into();
        store.save_snapshot(&session.snapshot()).unwrap();
    }

    let store = Store::open_at(dir.path()).unwrap();
    let snapshot = store.load_snapshot();
    assert!(snapshot.clocked_in);
    assert!(snapshot.running);
    assert_eq!(snapshot.remaining_secs, 1470);
    assert_eq!(snapshot.checklist.len(), 5);
    assert_eq!(snapshot.checked.get("water the plants"), Some(&true));
    assert_eq!(snapshot.cloud.project, "shield-prod");
}

#[test]
fn learning_cursor_persists_across_restarts() {
    let dir = TempDir::new().unwrap();

    {
        let store = Store::open_at(dir.path()).unwrap();
        let mut session = Session::with_seed(store.load_snapshot(), T0, 1);
        session.clock_in(T0);
        session.set_learning_every(5, T0);
        let due = T0 + 5 * 60_000;
        session.poll(due);
        assert_eq!(session.learning().cursor(), 1);
        store.save_snapshot(&session.snapshot()).unwrap();
    }

    let store = Store::open_at(dir.path()).unwrap();
    let session = Session::with_seed(store.load_snapshot(), T0, 2);
    assert_eq!(session.learning().cursor(), 1);
    assert_eq!(session.learning().peek().unwrap().title, "GitHub Actions (CI)");
}

#[test]
fn a_hand_stripped_record_fills_field_defaults() {
    let dir = TempDir::new().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    store
        .kv_set("focus_shield_v4", r#"{"clocked_in":true,"nudge_min_minutes":3}"#)
        .unwrap();

    let snapshot = store.load_snapshot();
    assert!(snapshot.clocked_in);
    assert_eq!(snapshot.nudge_min_minutes, 3);
    // everything absent from the record comes back as its default
    assert_eq!(snapshot.nudge_max_minutes, 20);
    assert_eq!(snapshot.focus_secs, 1500);
    assert_eq!(snapshot.affirmations.len(), 5);
    assert_eq!(snapshot.learning_topics.len(), 5);
}

#[test]
fn garbage_in_the_record_slot_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    store.kv_set("focus_shield_v4", "]]]]").unwrap();

    assert_eq!(store.load_snapshot(), Snapshot::default());
}

#[test]
fn unrelated_kv_entries_do_not_disturb_the_record() {
    let dir = TempDir::new().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    store.kv_set("some_other_key", "whatever").unwrap();

    let mut snapshot = Snapshot::default();
    snapshot.sound = false;
    store.save_snapshot(&snapshot).unwrap();

    assert_eq!(store.load_snapshot(), snapshot);
    assert_eq!(
        store.kv_get("some_other_key").unwrap().as_deref(),
        Some("whatever")
    );
}
