use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Key for the text-generation API. Optional: without it the suggestion
    /// endpoint reports a generation failure instead of the server refusing to start.
    pub gemini_api_key: Option<String>,
    pub suggestion_timeout: Duration,
    /// Word list replacing the embedded spellcheck dictionary.
    pub spellcheck_wordlist: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            suggestion_timeout: Duration::from_secs(
                std::env::var("SUGGESTION_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse::<u64>()
                    .context("SUGGESTION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            spellcheck_wordlist: optional_env("SPELLCHECK_WORDLIST").map(PathBuf::from),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
