//! Instruction text sent to the remote model.
//!
//! Layout, in fixed order:
//!
//! 1. persona block (name + behavioral rules)
//! 2. `Current user mood: <tag>`
//! 3. `Recent conversation:` followed by `<Sender>: <text>` lines
//! 4. the closing directive and `User message: "<text>"`
//!
//! Composition is pure: no I/O, no clock, no randomness.

use crate::history::Message;
use crate::mood::Mood;
use std::fmt::Write;

/// Fixed system-level behavior prepended to every remote prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub rules: Vec<String>,
}

impl Persona {
    pub fn new(name: impl Into<String>, rules: Vec<String>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn default_rules() -> Vec<String> {
        [
            "Gentle, non-judgmental, validating",
            "Brief replies (under 120 words)",
            "Never give medical advice",
            "Focus on emotional support, not solutions",
            "Use natural, conversational language",
            "Acknowledge feelings before offering perspective",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn render(&self) -> String {
        let mut out = format!(
            "You are {} — a warm, empathetic mental wellness companion.\n\nCore traits:\n",
            self.name
        );
        for rule in &self.rules {
            let _ = writeln!(out, "- {rule}");
        }
        out
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new("BloomMind AI", Self::default_rules())
    }
}

pub struct PromptComposer;

impl PromptComposer {
    pub fn compose<'a>(
        persona: &Persona,
        mood: Mood,
        window: impl IntoIterator<Item = &'a Message>,
        user_text: &str,
    ) -> String {
        let recent = window
            .into_iter()
            .map(|msg| format!("{}: {}", msg.sender.label(), msg.text))
            .collect::<Vec<_>>()
            .join("\n");

        let mut out = persona.render();
        let _ = write!(
            out,
            "\nCurrent user mood: {mood}\n\n\
             Recent conversation:\n{recent}\n\n\
             Respond to the user's latest message with compassion and clarity.\n\
             User message: \"{user_text}\""
        );
        out
    }
}
