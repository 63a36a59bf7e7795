//! Once-a-day reflection prompt, gated by [`keys::LAST_AFFIRMATION_DATE`].

use crate::storage::{KeyValueStore, keys};
use chrono::NaiveDate;

pub const PROMPTS: [&str; 10] = [
    "What is one small thing you are grateful for today?",
    "How can you be kind to yourself today?",
    "What is a challenge you've overcome recently that you're proud of?",
    "Who is someone that makes you feel safe and loved?",
    "What is one thing you can do today to bring yourself joy?",
    "If you could say one encouraging thing to yourself right now, what would it be?",
    "What is a goal you are working towards, big or small?",
    "How do you recharge your energy when you feel drained?",
    "What is a happy memory that makes you smile?",
    "What is one thing you appreciate about your personality?",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DailyReflection;

impl DailyReflection {
    pub fn format(prompt: &str) -> String {
        format!("🌟 **Daily Reflection** 🌟\n\n{prompt}")
    }

    pub fn last_shown(store: &dyn KeyValueStore) -> Option<NaiveDate> {
        let raw = match store.get(keys::LAST_AFFIRMATION_DATE) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read reflection date: {e}");
                return None;
            }
        };
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
    }

    /// A reflection is due unless one was already shown on `today`.
    pub fn is_due(store: &dyn KeyValueStore, today: NaiveDate) -> bool {
        Self::last_shown(store) != Some(today)
    }

    pub fn mark_shown(store: &dyn KeyValueStore, today: NaiveDate) {
        let value = today.format(DATE_FORMAT).to_string();
        if let Err(e) = store.set(keys::LAST_AFFIRMATION_DATE, &value) {
            tracing::warn!("Could not save reflection date: {e}");
        }
    }
}
