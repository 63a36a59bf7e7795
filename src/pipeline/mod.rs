//! Turn orchestration: compose → remote attempt → fallback → history.
//!
//! The pipeline is single-flight by construction: every turn takes
//! `&mut self`, so a second submission cannot start while one is awaiting
//! the remote responder.

use crate::config::Config;
use crate::fallback::FallbackResponder;
use crate::history::{HistoryStore, Message, Source};
use crate::mood::{Mood, MoodContext, MoodJournal};
use crate::prompt::{Persona, PromptComposer};
use crate::providers::{GeminiResponder, RemoteAttempt, RemoteResponder};
use crate::reflection::{self, DailyReflection};
use crate::settings::{SettingToggle, Settings};
use crate::storage::{KeyValueStore, keys};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Composing,
    AwaitingRemote,
    Delivered(Source),
}

/// Final text of a turn and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: Source,
}

impl Reply {
    pub fn is_offline(&self) -> bool {
        self.source == Source::Fallback
    }
}

pub struct ResponsePipeline {
    store: Arc<dyn KeyValueStore>,
    history: HistoryStore,
    mood: MoodContext,
    journal: MoodJournal,
    persona: Persona,
    window: usize,
    remote: Box<dyn RemoteResponder>,
    fallback: FallbackResponder,
    state: PipelineState,
}

impl ResponsePipeline {
    /// Build a pipeline over `store` and restore its persisted history.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        remote: Box<dyn RemoteResponder>,
        fallback: FallbackResponder,
    ) -> Self {
        let history = HistoryStore::new(store.clone());
        Self::assemble(store, history, remote, fallback)
    }

    /// Wire a pipeline from configuration with the Gemini responder.
    pub fn from_config(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        let remote = GeminiResponder::from_config(&config.remote, config.api_key.as_deref());
        let history = HistoryStore::new(store.clone())
            .with_max_messages(config.history.max_messages)
            .with_quota_trim(config.history.quota_trim);

        Self::assemble(store, history, Box::new(remote), FallbackResponder::new())
            .with_persona(config.persona.persona())
            .with_window(config.history.window)
    }

    fn assemble(
        store: Arc<dyn KeyValueStore>,
        mut history: HistoryStore,
        remote: Box<dyn RemoteResponder>,
        fallback: FallbackResponder,
    ) -> Self {
        history.load();
        Self {
            journal: MoodJournal::new(store.clone()),
            store,
            history,
            mood: MoodContext::default(),
            persona: Persona::default(),
            window: crate::history::DEFAULT_WINDOW,
            remote,
            fallback,
            state: PipelineState::Idle,
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Replace the history store, e.g. to apply a cap. The new store is
    /// loaded from the shared medium.
    pub fn with_history(mut self, mut history: HistoryStore) -> Self {
        history.load();
        self.history = history;
        self
    }

    /// Run one conversation turn. Blank input is ignored.
    pub async fn submit(&mut self, user_text: &str) -> Option<Reply> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return None;
        }

        self.transition(PipelineState::Composing);
        self.history.append(Message::user(user_text));
        let instruction = PromptComposer::compose(
            &self.persona,
            self.mood.current(),
            self.history.recent_window(self.window),
            user_text,
        );

        self.transition(PipelineState::AwaitingRemote);
        let outcome = self.remote.attempt(&instruction).await;

        let reply = match outcome {
            RemoteAttempt::Success(text) => Reply {
                text,
                source: Source::Remote,
            },
            failure => {
                tracing::info!(
                    responder = self.remote.name(),
                    outcome = %failure,
                    "Remote reply unavailable, using offline fallback"
                );
                Reply {
                    text: self.fallback.generate(user_text),
                    source: Source::Fallback,
                }
            }
        };

        self.history
            .append(Message::bot(reply.text.clone(), Some(reply.source)));
        self.transition(PipelineState::Delivered(reply.source));
        self.transition(PipelineState::Idle);
        Some(reply)
    }

    /// Record a mood selection. Returns the acknowledgement reply, if the
    /// mood has one; it is also appended to history.
    pub fn set_mood(&mut self, mood: Mood) -> Option<String> {
        self.mood.set(mood);
        self.journal.record(mood, Utc::now());
        let ack = mood.acknowledgement()?;
        self.history.append(Message::bot(ack, None));
        Some(ack.to_string())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Greet a newly signed-in user. Starts a fresh conversation.
    pub fn welcome(&mut self, username: &str) -> String {
        let username = username.trim();
        if let Err(e) = self.store.set(keys::USERNAME, username) {
            tracing::warn!("Could not save username: {e}");
        }
        self.history.clear();

        let text = format!(
            "Hello {username}! I'm {}, your AI companion for emotional support and motivation. 🌟\n\n\
             I'm here to listen, support you, and help you find your inner strength. How are you feeling today?",
            self.persona.name
        );
        self.history.append(Message::bot(text.clone(), None));
        text
    }

    pub fn username(&self) -> Option<String> {
        self.store
            .get(keys::USERNAME)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read username: {e}");
                None
            })
            .filter(|name| !name.trim().is_empty())
    }

    /// At most one reflection prompt per calendar day.
    pub fn daily_reflection(&mut self, today: NaiveDate) -> Option<String> {
        if !DailyReflection::is_due(self.store.as_ref(), today) {
            return None;
        }
        let prompt = self.fallback.pick(&reflection::PROMPTS);
        let text = DailyReflection::format(&prompt);
        self.history.append(Message::bot(text.clone(), None));
        DailyReflection::mark_shown(self.store.as_ref(), today);
        Some(text)
    }

    pub fn settings(&self) -> Settings {
        Settings::load(self.store.as_ref())
    }

    pub fn update_setting(&mut self, toggle: SettingToggle, value: bool) -> Settings {
        let mut settings = self.settings();
        settings.set(toggle, value);
        settings.save(self.store.as_ref());
        settings
    }

    /// Sign out: erase every persisted key and in-memory state.
    pub fn reset(&mut self) {
        for key in keys::ALL {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, "Failed to remove persisted state: {e}");
            }
        }
        self.history.clear();
        self.mood.reset();
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn mood(&self) -> Mood {
        self.mood.current()
    }

    pub fn mood_journal(&self) -> &MoodJournal {
        &self.journal
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::debug!(from = ?self.state, to = ?next, "Pipeline state");
        self.state = next;
    }
}
