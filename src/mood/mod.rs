//! Current mood tag and the bounded mood journal.

use crate::storage::{KeyValueStore, keys};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString};

pub const JOURNAL_CAPACITY: usize = 10;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mood {
    Amazing,
    Happy,
    Okay,
    Sad,
    Anxious,
    #[default]
    Neutral,
}

impl Mood {
    /// Reply shown when the user picks this mood. Neutral has none.
    pub fn acknowledgement(self) -> Option<&'static str> {
        match self {
            Self::Amazing => Some(
                "That's fantastic! 🤩 I'm so happy you're feeling amazing! What's making today so special?",
            ),
            Self::Happy => {
                Some("Wonderful! 😊 It's great to see you in good spirits! What's bringing you joy?")
            }
            Self::Okay => Some(
                "I hear you. 😐 Some days are just okay, and that's perfectly fine. Want to talk about anything?",
            ),
            Self::Sad => Some(
                "I'm here for you. 😔 It's okay to feel sad. Would you like to share what's on your mind?",
            ),
            Self::Anxious => Some(
                "I understand. 😰 Anxiety can be tough. Let's work through this together. What's worrying you?",
            ),
            Self::Neutral => None,
        }
    }
}

/// The most recently selected mood. Overwritten on every selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodContext {
    selected: Option<Mood>,
}

impl MoodContext {
    pub fn set(&mut self, mood: Mood) {
        self.selected = Some(mood);
    }

    /// The selected mood, or neutral when none was picked.
    pub fn current(&self) -> Mood {
        self.selected.unwrap_or_default()
    }

    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    pub(crate) fn reset(&mut self) {
        self.selected = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
}

/// Last [`JOURNAL_CAPACITY`] mood selections, persisted under
/// [`keys::MOOD_HISTORY`]. Oldest entries are evicted first.
pub struct MoodJournal {
    store: Arc<dyn KeyValueStore>,
}

impl MoodJournal {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> Vec<MoodEntry> {
        match self.store.get(keys::MOOD_HISTORY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt mood history: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read mood history: {e}");
                Vec::new()
            }
        }
    }

    pub fn record(&self, mood: Mood, at: DateTime<Utc>) {
        let mut entries = self.entries();
        entries.push(MoodEntry {
            mood,
            timestamp: at,
        });
        if entries.len() > JOURNAL_CAPACITY {
            let excess = entries.len() - JOURNAL_CAPACITY;
            entries.drain(..excess);
        }

        let result = serde_json::to_string(&entries)
            .map_err(Into::into)
            .and_then(|raw| self.store.set(keys::MOOD_HISTORY, &raw));
        if let Err(e) = result {
            tracing::warn!(mood = %mood, "Could not save mood history: {e}");
        }
    }
}
