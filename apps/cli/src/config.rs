use anyhow::{Context, Result};

use crate::llm::ModelKind;

/// Application configuration loaded from environment variables.
/// Only the API key for the selected model is required; the others stay
/// optional so a single-provider setup works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub deepseek_api_key: Option<String>,
    pub data_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            deepseek_api_key: optional_env("DEEPSEEK_API_KEY"),
            data_dir: std::env::var("JOBPILOT_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Resolves the API key for the chosen model, failing with a pointer to
    /// the missing environment variable.
    pub fn api_key_for(&self, model: ModelKind) -> Result<String> {
        let (key, var) = match model {
            ModelKind::ChatGpt => (&self.openai_api_key, "OPENAI_API_KEY"),
            ModelKind::Gemini => (&self.gemini_api_key, "GEMINI_API_KEY"),
            ModelKind::Deepseek => (&self.deepseek_api_key, "DEEPSEEK_API_KEY"),
        };
        key.clone()
            .with_context(|| format!("Required environment variable '{var}' is not set"))
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
