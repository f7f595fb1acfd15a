use anyhow::{Context, Result};

/// Engine configuration loaded from environment variables.
/// `from_env` fails with a descriptive error if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Per-request timeout for model calls. Brand reports are long-form, so
    /// the default is generous.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            request_timeout_secs: std::env::var("LLM_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "180".to_string())
                .parse::<u64>()
                .context("LLM_REQUEST_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
