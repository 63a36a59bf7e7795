use crate::error::ConfigError;
use crate::history::{DEFAULT_QUOTA_TRIM, DEFAULT_WINDOW};
use crate::prompt::Persona;
use crate::providers::gemini::{
    DEFAULT_BASE_URL, DEFAULT_DEADLINE_SECS, DEFAULT_PRIMARY_MODEL, DEFAULT_SECONDARY_MODEL,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml - computed from home, not serialized
    #[serde(skip)]
    pub home_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub api_key: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub persona: PersonaConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_dir: PathBuf::new(),
            config_path: PathBuf::new(),
            api_key: None,
            log_level: default_log_level(),
            remote: RemoteConfig::default(),
            history: HistoryConfig::default(),
            persona: PersonaConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.remote.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "remote.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.remote.primary_model.trim().is_empty()
            || self.remote.secondary_model.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "remote model names must not be empty".into(),
            ));
        }
        if self.history.window == 0 {
            return Err(ConfigError::Validation(
                "history.window must be greater than 0".into(),
            ));
        }
        if self.history.quota_trim == 0 {
            return Err(ConfigError::Validation(
                "history.quota_trim must be greater than 0".into(),
            ));
        }
        if self.history.max_messages == Some(0) {
            return Err(ConfigError::Validation(
                "history.max_messages must be greater than 0 when set".into(),
            ));
        }
        Ok(())
    }

    /// Where persisted companion state lives.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| self.home_dir.join("data"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_primary_model")]
    pub primary_model: String,
    #[serde(default = "default_secondary_model")]
    pub secondary_model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_primary_model() -> String {
    DEFAULT_PRIMARY_MODEL.into()
}

fn default_secondary_model() -> String {
    DEFAULT_SECONDARY_MODEL.into()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_DEADLINE_SECS
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            primary_model: default_primary_model(),
            secondary_model: default_secondary_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Messages quoted back to the model per request.
    #[serde(default = "default_window")]
    pub window: usize,
    /// Messages kept when a full write is rejected by the medium.
    #[serde(default = "default_quota_trim")]
    pub quota_trim: usize,
    /// In-memory cap; unset keeps everything.
    #[serde(default)]
    pub max_messages: Option<usize>,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_quota_trim() -> usize {
    DEFAULT_QUOTA_TRIM
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            quota_trim: default_quota_trim(),
            max_messages: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaConfig {
    #[serde(default = "default_persona_name")]
    pub name: String,
    #[serde(default = "Persona::default_rules")]
    pub rules: Vec<String>,
}

fn default_persona_name() -> String {
    Persona::default().name
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: default_persona_name(),
            rules: Persona::default_rules(),
        }
    }
}

impl PersonaConfig {
    pub fn persona(&self) -> Persona {
        Persona::new(self.name.clone(), self.rules.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Per-value byte quota for the file store.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}

fn default_quota_bytes() -> usize {
    5 * 1024 * 1024
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: default_quota_bytes(),
        }
    }
}
