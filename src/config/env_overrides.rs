use super::Config;

/// Every variable `apply_env_overrides` reads.
#[cfg(test)]
pub(super) const ENV_KEYS: [&str; 6] = [
    "BLOOMMIND_API_KEY",
    "GEMINI_API_KEY",
    "BLOOMMIND_BASE_URL",
    "BLOOMMIND_MODEL",
    "BLOOMMIND_FALLBACK_MODEL",
    "BLOOMMIND_TIMEOUT_SECS",
];

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty("BLOOMMIND_API_KEY").or_else(|| non_empty("GEMINI_API_KEY")) {
            self.api_key = Some(key);
        }

        if let Some(url) = non_empty("BLOOMMIND_BASE_URL") {
            self.remote.base_url = url;
        }

        if let Some(model) = non_empty("BLOOMMIND_MODEL") {
            self.remote.primary_model = model;
        }

        if let Some(model) = non_empty("BLOOMMIND_FALLBACK_MODEL") {
            self.remote.secondary_model = model;
        }

        if let Some(secs) = non_empty("BLOOMMIND_TIMEOUT_SECS")
            && let Ok(secs) = secs.trim().parse::<u64>()
            && secs > 0
        {
            self.remote.timeout_secs = secs;
        }
    }
}
