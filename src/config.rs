// src/config.rs
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Provider secret. Not validated here, a missing key shows up on the first call.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// | Variable        | Default                          |
    /// |-----------------|----------------------------------|
    /// | `GROQ_API_KEY`  | unset                            |
    /// | `GROQ_BASE_URL` | `https://api.groq.com/openai/v1` |
    /// | `GROQ_MODEL`    | `llama-3.3-70b-versatile`        |
    /// | `BIND_ADDR`     | `0.0.0.0:3000`                   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_key: non_empty("GROQ_API_KEY"),
            base_url: non_empty("GROQ_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: non_empty("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }

    /// Loads `.env` from the working directory if there is one.
    pub fn load_dotenv() {
        match dotenvy::dotenv() {
            Ok(path) => tracing::info!("loaded .env from {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("no .env file found"),
            Err(e) => tracing::warn!("ignoring malformed .env: {}", e),
        }
    }
}
