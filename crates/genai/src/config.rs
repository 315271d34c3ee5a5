use std::time::Duration;

/// Default interval between video operation status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default overall deadline for a video operation to complete.
pub const DEFAULT_POLL_DEADLINE: Duration = Duration::from_secs(300);

/// Connection configuration for the generative API.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Base HTTP URL, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub base_url: String,
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Interval between video operation status checks.
    pub poll_interval: Duration,
    /// Overall deadline for a video operation to complete.
    pub poll_deadline: Duration,
}

impl GenAiConfig {
    /// Create a config with the default poll cadence.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_deadline: DEFAULT_POLL_DEADLINE,
        }
    }
}
