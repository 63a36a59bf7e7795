use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Holds the process-wide env lock and restores every touched variable on
/// drop, in reverse order.
pub(super) struct EnvScope {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvScope {
    pub(super) fn new() -> Self {
        Self {
            saved: Vec::new(),
            _lock: ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub(super) fn set(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: ENV_LOCK is held for the lifetime of the scope, so no other
        // test mutates the environment concurrently.
        unsafe {
            std::env::set_var(key, value);
        }
        self
    }

    pub(super) fn unset(&mut self, key: &'static str) -> &mut Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: see `set`.
        unsafe {
            std::env::remove_var(key);
        }
        self
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some((key, previous)) = self.saved.pop() {
            // SAFETY: the lock guard is dropped after this body runs.
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
