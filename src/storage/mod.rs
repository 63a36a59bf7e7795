//! Minimal key-value persistence medium.
//!
//! Every persisted piece of companion state (history, mood journal, settings,
//! reflection gate, username) lives under one logical key. Backends only have
//! to offer `get`/`set`/`remove` on strings; the stores above them own the
//! JSON encoding and absorb failures.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Logical keys, independent of the backing medium.
pub mod keys {
    pub const HISTORY: &str = "history";
    pub const MOOD_HISTORY: &str = "mood-history";
    pub const SETTINGS: &str = "settings";
    pub const LAST_AFFIRMATION_DATE: &str = "last-affirmation-date";
    pub const USERNAME: &str = "username";

    /// Every key owned by the companion, used by reset.
    pub const ALL: [&str; 5] = [
        USERNAME,
        HISTORY,
        MOOD_HISTORY,
        SETTINGS,
        LAST_AFFIRMATION_DATE,
    ];

    /// Namespace prefix applied by backends that share a medium.
    pub const NAMESPACE: &str = "bloommind";

    pub fn namespaced(key: &str) -> String {
        format!("{NAMESPACE}-{key}")
    }
}

/// String key-value contract shared by all persistence backends.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Check a write against an optional byte quota.
pub(crate) fn check_quota(
    key: &str,
    bytes: usize,
    quota: Option<usize>,
) -> Result<(), StorageError> {
    match quota {
        Some(quota) if bytes > quota => Err(StorageError::QuotaExceeded {
            key: keys::namespaced(key),
            bytes,
            quota,
        }),
        _ => Ok(()),
    }
}
