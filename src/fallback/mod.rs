//! Offline reply generator: keyword classification plus canned replies.
//!
//! This is the terminal fallback. `generate` cannot fail.

mod table;

pub use table::{CategoryTable, TRIGGER_RULES};

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Sad,
    Stressed,
    Anxious,
    Motivation,
    Happy,
    Grateful,
    Lonely,
    Default,
}

/// First category in [`TRIGGER_RULES`] order whose trigger occurs in the
/// lower-cased text; [`Category::Default`] when none does.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    TRIGGER_RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| lower.contains(t)))
        .map_or(Category::Default, |(_, category)| *category)
}

pub struct FallbackResponder {
    table: CategoryTable,
    rng: Box<dyn RngCore + Send>,
}

impl FallbackResponder {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            table: CategoryTable::builtin(),
            rng: Box::new(rng),
        }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn generate(&mut self, user_text: &str) -> String {
        let category = classify(user_text);
        let pool = self.table.replies(category);
        let reply = self.pick(pool);
        tracing::debug!(%category, "Generated fallback reply");
        reply
    }

    /// Uniform choice from a non-empty pool, using the injected randomness.
    pub(crate) fn pick(&mut self, pool: &[&'static str]) -> String {
        debug_assert!(!pool.is_empty());
        let index = self.rng.random_range(0..pool.len());
        pool[index].to_string()
    }
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::new()
    }
}
