use std::sync::Arc;
use std::time::Duration;

use super::pipeline_harness::{
    PRIMARY_PATH, SECONDARY_PATH, gemini_for, pipeline_with, reply_body,
};
use bloommind::fallback::{Category, CategoryTable};
use bloommind::mood::Mood;
use bloommind::storage::MemoryStore;
use bloommind::{Sender, Source};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn remote_reply_reaches_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("You matter.")))
        .expect(1)
        .mount(&server)
        .await;

    let mut pipeline = pipeline_with(
        Arc::new(MemoryStore::new()),
        gemini_for(&server, Duration::from_secs(5)),
    );
    let reply = pipeline.submit("hello").await.unwrap();

    assert_eq!(reply.text, "You matter.");
    assert_eq!(reply.source, Source::Remote);
    let messages = pipeline.history().messages();
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].text, "You matter.");
}

#[tokio::test]
async fn missing_model_uses_secondary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SECONDARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Hi")))
        .expect(1)
        .mount(&server)
        .await;

    let mut pipeline = pipeline_with(
        Arc::new(MemoryStore::new()),
        gemini_for(&server, Duration::from_secs(5)),
    );
    let reply = pipeline.submit("hello").await.unwrap();
    assert_eq!(reply.text, "Hi");
    assert_eq!(reply.source, Source::Remote);
}

#[tokio::test]
async fn slow_remote_times_out_into_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reply_body("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut pipeline = pipeline_with(
        Arc::new(MemoryStore::new()),
        gemini_for(&server, Duration::from_millis(200)),
    );
    let reply = pipeline.submit("so much pressure at work").await.unwrap();

    assert_eq!(reply.source, Source::Fallback);
    assert_eq!(reply.text, CategoryTable::builtin().replies(Category::Stressed)[0]);
    assert!(
        pipeline
            .history()
            .messages()
            .iter()
            .all(|m| m.text != "too late")
    );
}

#[tokio::test]
async fn server_error_falls_back_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SECONDARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let mut pipeline = pipeline_with(
        Arc::new(MemoryStore::new()),
        gemini_for(&server, Duration::from_secs(5)),
    );
    let reply = pipeline.submit("what's the weather").await.unwrap();
    assert_eq!(reply.source, Source::Fallback);
    assert_eq!(reply.text, CategoryTable::builtin().replies(Category::Default)[0]);
}

#[tokio::test]
async fn mood_is_sent_with_the_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
        .mount(&server)
        .await;

    let mut pipeline = pipeline_with(
        Arc::new(MemoryStore::new()),
        gemini_for(&server, Duration::from_secs(5)),
    );
    pipeline.set_mood(Mood::Sad);
    pipeline.submit("rough week").await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("Current user mood: sad"));
    assert!(text.ends_with("User message: \"rough week\""));
}
