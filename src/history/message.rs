use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Speaker label used when a message is quoted back to the model.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Bot => "Assistant",
        }
    }
}

/// Where a bot reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    Remote,
    Fallback,
}

/// One exchanged message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    /// RFC 3339. Older blobs stored a display time under `time`.
    #[serde(alias = "time", default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>, source: Option<Source>) -> Self {
        Self {
            source,
            ..Self::new(text, Sender::Bot)
        }
    }
}
