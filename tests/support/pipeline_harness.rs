#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bloommind::fallback::FallbackResponder;
use bloommind::providers::{GeminiResponder, RemoteAttempt, RemoteResponder};
use bloommind::storage::KeyValueStore;
use bloommind::ResponsePipeline;
use rand::RngCore;
use wiremock::MockServer;

pub const PRIMARY_PATH: &str = "/models/gemini-1.5-flash:generateContent";
pub const SECONDARY_PATH: &str = "/models/gemini-pro:generateContent";

/// Always selects the first candidate of any pool.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

/// Plays back queued outcomes in order, then repeats the last one.
pub struct QueuedResponder {
    outcomes: Mutex<Vec<RemoteAttempt>>,
    pub instructions: Arc<Mutex<Vec<String>>>,
}

impl QueuedResponder {
    pub fn new(outcomes: Vec<RemoteAttempt>) -> Self {
        let mut outcomes = outcomes;
        outcomes.reverse();
        Self {
            outcomes: Mutex::new(outcomes),
            instructions: Arc::default(),
        }
    }
}

impl RemoteResponder for QueuedResponder {
    fn name(&self) -> &str {
        "queued"
    }

    fn attempt<'a>(
        &'a self,
        instruction: &'a str,
    ) -> Pin<Box<dyn Future<Output = RemoteAttempt> + Send + 'a>> {
        Box::pin(async move {
            self.instructions
                .lock()
                .unwrap()
                .push(instruction.to_string());
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.len() > 1 {
                outcomes.pop().unwrap()
            } else {
                outcomes.last().cloned().unwrap_or(RemoteAttempt::NetworkError)
            }
        })
    }
}

pub fn reply_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
}

pub fn gemini_for(server: &MockServer, deadline: Duration) -> GeminiResponder {
    GeminiResponder::new(Some("integration-key"))
        .with_base_url(&server.uri())
        .with_deadline(deadline)
}

pub fn pipeline_with(
    store: Arc<dyn KeyValueStore>,
    remote: impl RemoteResponder + 'static,
) -> ResponsePipeline {
    ResponsePipeline::new(store, Box::new(remote), FallbackResponder::with_rng(ZeroRng))
}
