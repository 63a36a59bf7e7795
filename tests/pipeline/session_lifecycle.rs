use std::sync::Arc;

use super::pipeline_harness::{QueuedResponder, pipeline_with};
use bloommind::mood::{JOURNAL_CAPACITY, Mood};
use bloommind::providers::RemoteAttempt;
use bloommind::settings::SettingToggle;
use bloommind::storage::{FileStore, KeyValueStore, keys};
use chrono::NaiveDate;
use tempfile::TempDir;

fn file_store(tmp: &TempDir) -> Arc<dyn KeyValueStore> {
    Arc::new(FileStore::open(tmp.path()).unwrap())
}

#[test]
fn mood_journal_is_bounded_and_persisted() {
    let tmp = TempDir::new().unwrap();
    let mut pipeline = pipeline_with(
        file_store(&tmp),
        QueuedResponder::new(vec![RemoteAttempt::Timeout]),
    );
    for _ in 0..JOURNAL_CAPACITY {
        pipeline.set_mood(Mood::Okay);
    }
    pipeline.set_mood(Mood::Amazing);

    let reopened = pipeline_with(
        file_store(&tmp),
        QueuedResponder::new(vec![RemoteAttempt::Timeout]),
    );
    let entries = reopened.mood_journal().entries();
    assert_eq!(entries.len(), JOURNAL_CAPACITY);
    assert_eq!(entries.last().unwrap().mood, Mood::Amazing);
    // Selected mood lives only for the session.
    assert_eq!(reopened.mood(), Mood::Neutral);
}

#[test]
fn reflection_gate_survives_restart() {
    let tmp = TempDir::new().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    let mut first = pipeline_with(
        file_store(&tmp),
        QueuedResponder::new(vec![RemoteAttempt::Timeout]),
    );
    assert!(first.daily_reflection(today).is_some());

    let mut second = pipeline_with(
        file_store(&tmp),
        QueuedResponder::new(vec![RemoteAttempt::Timeout]),
    );
    assert!(second.daily_reflection(today).is_none());
    assert!(second.daily_reflection(today.succ_opt().unwrap()).is_some());
}

#[tokio::test]
async fn login_then_reset_leaves_nothing_behind() {
    let tmp = TempDir::new().unwrap();
    let store = file_store(&tmp);
    let mut pipeline = pipeline_with(
        store.clone(),
        QueuedResponder::new(vec![RemoteAttempt::Success("hey".into())]),
    );

    pipeline.welcome("Sam");
    pipeline.set_mood(Mood::Happy);
    pipeline.submit("hi").await;
    pipeline.update_setting(SettingToggle::Animations, false);
    assert_eq!(pipeline.history().len(), 4);

    pipeline.reset();
    for key in keys::ALL {
        assert_eq!(store.get(key).unwrap(), None, "{key} should be erased");
    }
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    assert!(pipeline.settings().animations);
}
