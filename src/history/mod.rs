//! Bounded, persisted conversation log.

mod message;

pub use message::{Message, Sender, Source};

use crate::error::StorageError;
use crate::storage::{KeyValueStore, keys};
use std::sync::Arc;

pub const DEFAULT_WINDOW: usize = 12;
pub const DEFAULT_QUOTA_TRIM: usize = 20;

/// Ordered log of exchanged messages, persisted under [`keys::HISTORY`].
///
/// Order is insertion order. Persistence is best effort: a failed write is
/// retried once with only the most recent `quota_trim` messages and then
/// dropped with a warning. The in-memory log is never shortened by a failed
/// write; only `max_messages` trims it.
pub struct HistoryStore {
    messages: Vec<Message>,
    store: Arc<dyn KeyValueStore>,
    max_messages: Option<usize>,
    quota_trim: usize,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            messages: Vec::new(),
            store,
            max_messages: None,
            quota_trim: DEFAULT_QUOTA_TRIM,
        }
    }

    /// Cap the in-memory log; older messages are dropped first.
    pub fn with_max_messages(mut self, max_messages: Option<usize>) -> Self {
        self.max_messages = max_messages;
        self
    }

    pub fn with_quota_trim(mut self, quota_trim: usize) -> Self {
        self.quota_trim = quota_trim.max(1);
        self
    }

    /// Restore the persisted log. Missing or corrupt data yields an empty log.
    pub fn load(&mut self) {
        self.messages = match self.store.get(keys::HISTORY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Message>>(&raw) {
                Ok(messages) => messages,
                Err(e) => {
                    tracing::warn!("Discarding corrupt history blob: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read history, starting empty: {e}");
                Vec::new()
            }
        };
        self.enforce_cap();
        tracing::debug!(messages = self.messages.len(), "History loaded");
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.enforce_cap();
        self.persist();
    }

    /// The last `n` messages, oldest first. Cloning the iterator restarts it.
    pub fn recent_window(
        &self,
        n: usize,
    ) -> impl ExactSizeIterator<Item = &Message> + Clone + '_ {
        let start = self.messages.len().saturating_sub(n);
        self.messages[start..].iter()
    }

    /// Empty the log and erase its persisted copy.
    pub fn clear(&mut self) {
        self.messages.clear();
        if let Err(e) = self.store.remove(keys::HISTORY) {
            tracing::warn!("Failed to remove persisted history: {e}");
            // Leave an empty log behind rather than the old one.
            if let Err(e) = self.store.set(keys::HISTORY, "[]") {
                tracing::error!("Unable to erase persisted history: {e}");
            }
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn enforce_cap(&mut self) {
        if let Some(max) = self.max_messages
            && self.messages.len() > max
        {
            let excess = self.messages.len() - max;
            self.messages.drain(..excess);
        }
    }

    fn persist(&self) {
        let first = match Self::write(self.store.as_ref(), &self.messages) {
            Ok(()) => return,
            Err(e) => e,
        };
        tracing::warn!(
            keep = self.quota_trim,
            "Storage write failed ({first}); retrying with recent messages only"
        );

        let start = self.messages.len().saturating_sub(self.quota_trim);
        if let Err(e) = Self::write(self.store.as_ref(), &self.messages[start..]) {
            tracing::error!("Unable to save history: {e}");
        }
    }

    fn write(store: &dyn KeyValueStore, messages: &[Message]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(messages)?;
        store.set(keys::HISTORY, &raw)
    }
}
