use std::time::Duration;

use brandstudio_genai::GenAiConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Generative API base URL.
    pub genai_base_url: String,
    /// Generative API key.
    pub genai_api_key: String,
    /// Seconds between video operation status checks (default: `5`).
    pub video_poll_interval_secs: u64,
    /// Overall video operation deadline in seconds (default: `300`).
    pub video_poll_deadline_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                                          |
    /// |-----------------------------|--------------------------------------------------|
    /// | `HOST`                      | `0.0.0.0`                                        |
    /// | `PORT`                      | `3000`                                           |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`                          |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                                             |
    /// | `GENAI_BASE_URL`            | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `GENAI_API_KEY`             | (empty)                                          |
    /// | `VIDEO_POLL_INTERVAL_SECS`  | `5`                                              |
    /// | `VIDEO_POLL_DEADLINE_SECS`  | `300`                                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let genai_base_url = std::env::var("GENAI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());

        let genai_api_key = std::env::var("GENAI_API_KEY").unwrap_or_default();

        let video_poll_interval_secs: u64 = std::env::var("VIDEO_POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("VIDEO_POLL_INTERVAL_SECS must be a valid u64");

        let video_poll_deadline_secs: u64 = std::env::var("VIDEO_POLL_DEADLINE_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("VIDEO_POLL_DEADLINE_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            genai_base_url,
            genai_api_key,
            video_poll_interval_secs,
            video_poll_deadline_secs,
        }
    }

    /// Generative client configuration derived from this server config.
    pub fn genai_config(&self) -> GenAiConfig {
        let mut config = GenAiConfig::new(self.genai_base_url.clone(), self.genai_api_key.clone());
        config.poll_interval = Duration::from_secs(self.video_poll_interval_secs);
        config.poll_deadline = Duration::from_secs(self.video_poll_deadline_secs);
        config
    }
}
