use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `BloomMind`.
///
/// Remote inference failures are not errors: they travel as
/// [`crate::providers::RemoteAttempt`] variants and always end in the local
/// fallback reply. What remains here is configuration and the persistence
/// medium, and the persistence side is absorbed (logged) by every store that
/// uses it.
#[derive(Debug, Error)]
pub enum BloomError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Storage ─────────────────────────────────────────────────────────
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Storage errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("quota exceeded writing {key}: {bytes} bytes over a {quota} byte quota")]
    QuotaExceeded {
        key: String,
        bytes: usize,
        quota: usize,
    },

    #[error("serialization: {0}")]
    Serialization(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, BloomError>;
