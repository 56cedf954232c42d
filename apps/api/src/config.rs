use anyhow::{Context, Result};

/// Default Gemini model, overridable via LLM_MODEL.
pub const DEFAULT_LLM_MODEL: &str = "models/gemini-2.5-flash";

/// Application configuration loaded from environment variables.
/// Errors at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Optional: when absent, the API runs with a mock responder instead of
    /// a half-initialized LLM client.
    pub gemini_api_key: Option<String>,
    pub llm_model: String,
    /// LLM_DISABLED=true forces the mock responder even with a key present.
    pub llm_disabled: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_disabled: std::env::var("LLM_DISABLED")
                .map(|v| v == "true")
                .unwrap_or(false),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
