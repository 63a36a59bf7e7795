use std::sync::Arc;

use super::pipeline_harness::{QueuedResponder, pipeline_with};
use bloommind::history::HistoryStore;
use bloommind::providers::RemoteAttempt;
use bloommind::storage::{FileStore, KeyValueStore, MemoryStore, keys};
use bloommind::{Message, Source};
use tempfile::TempDir;

#[tokio::test]
async fn file_store_history_survives_restart() {
    let tmp = TempDir::new().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(tmp.path()).unwrap());

    let mut first = pipeline_with(
        store.clone(),
        QueuedResponder::new(vec![
            RemoteAttempt::Success("one".into()),
            RemoteAttempt::Timeout,
        ]),
    );
    first.submit("first").await;
    first.submit("second").await;
    drop(first);

    let reopened: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(tmp.path()).unwrap());
    let second = pipeline_with(reopened, QueuedResponder::new(vec![RemoteAttempt::Timeout]));
    let texts: Vec<_> = second
        .history()
        .messages()
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(texts.len(), 4);
    assert_eq!(texts[0], "first");
    assert_eq!(texts[1], "one");
    assert_eq!(texts[2], "second");
    assert_eq!(
        second.history().messages()[3].source,
        Some(Source::Fallback)
    );
    assert!(tmp.path().join("bloommind-history.json").exists());
}

#[tokio::test]
async fn window_quotes_only_recent_turns() {
    let responder = QueuedResponder::new(vec![RemoteAttempt::Success("noted".into())]);
    let seen = responder.instructions.clone();
    let mut pipeline = pipeline_with(Arc::new(MemoryStore::new()), responder);

    for i in 0..8 {
        pipeline.submit(&format!("note {i}")).await;
    }

    // The eighth turn sees 15 messages; a window of 12 starts after note 1.
    let last = seen.lock().unwrap().last().cloned().unwrap();
    assert!(!last.contains("User: note 1\n"));
    assert!(last.contains("User: note 2\n"));
    assert!(last.contains("User: note 7\n"));
}

#[tokio::test]
async fn capped_history_drops_oldest() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let mut pipeline = pipeline_with(
        store.clone(),
        QueuedResponder::new(vec![RemoteAttempt::Success("ok".into())]),
    )
    .with_history(HistoryStore::new(store.clone()).with_max_messages(Some(4)));

    for i in 0..5 {
        pipeline.submit(&format!("msg {i}")).await;
    }
    let messages = pipeline.history().messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].text, "msg 3");

    let raw = store.get(keys::HISTORY).unwrap().unwrap();
    let persisted: Vec<Message> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, messages);
}

#[tokio::test]
async fn quota_pressure_never_blocks_a_reply() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::with_quota(600));
    let mut pipeline = pipeline_with(
        store.clone(),
        QueuedResponder::new(vec![RemoteAttempt::NetworkError]),
    );

    for i in 0..10 {
        let reply = pipeline.submit(&format!("message number {i}")).await;
        assert!(reply.is_some());
    }
    assert_eq!(pipeline.history().len(), 20);
}

#[tokio::test]
async fn corrupt_blob_starts_empty() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    store.set(keys::HISTORY, "{not json").unwrap();
    let pipeline = pipeline_with(store, QueuedResponder::new(vec![RemoteAttempt::Timeout]));
    assert!(pipeline.history().is_empty());
}
