use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama3-70b-8192";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub completion: CompletionConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the chat-completion client needs. Built once at startup and
/// handed to `ChatCompletionClient::new`; never read from globals afterwards.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

// Manual impl so the API key never ends up in logs.
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CompletionConfig {
    /// Config pointing at the default endpoint and model with the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_COMPLETION_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut completion = CompletionConfig::with_api_key(require_env("GROQ_API_KEY")?);
        if let Some(endpoint) = optional_env("GROQ_API_URL") {
            completion.endpoint = endpoint;
        }
        if let Some(model) = optional_env("GROQ_MODEL") {
            completion.model = model;
        }
        if let Some(raw) = optional_env("GROQ_TEMPERATURE") {
            completion.temperature = raw
                .parse::<f32>()
                .context("GROQ_TEMPERATURE must be a number")?;
        }
        if let Some(raw) = optional_env("GROQ_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .context("GROQ_TIMEOUT_SECS must be a whole number of seconds")?;
            completion.timeout = Duration::from_secs(secs);
        }

        Ok(Config {
            completion,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
