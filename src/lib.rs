#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod error;
pub mod fallback;
pub mod history;
pub mod mood;
pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod reflection;
pub mod settings;
pub mod storage;
pub mod ui;

pub use config::Config;
pub use error::{BloomError, Result};
pub use fallback::FallbackResponder;
pub use history::{HistoryStore, Message, Sender, Source};
pub use mood::Mood;
pub use pipeline::{PipelineState, Reply, ResponsePipeline};
pub use providers::{GeminiResponder, RemoteAttempt, RemoteResponder};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
