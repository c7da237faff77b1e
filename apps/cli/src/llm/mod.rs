//! LLM client — the single point of entry for all model API calls.
//!
//! No other module talks to a provider directly. The job-description
//! extractor consumes this through the [`TextGenerator`] trait so it can be
//! tested without a network.

use async_trait::async_trait;
use clap::ValueEnum;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Supported model providers. Selected explicitly by the CLI layer;
/// the scoring engine never prompts for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    ChatGpt,
    Gemini,
    Deepseek,
}

impl ModelKind {
    /// Completions-style endpoint for the provider.
    pub fn api_url(self) -> &'static str {
        match self {
            ModelKind::ChatGpt => "https://api.openai.com/v1/completions",
            ModelKind::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai/completions",
            ModelKind::Deepseek => "https://api.deepseek.com/beta/completions",
        }
    }

    /// Model identifier sent in the request body.
    pub fn model_name(self) -> &'static str {
        match self {
            ModelKind::ChatGpt => "gpt-3.5-turbo-instruct",
            ModelKind::Gemini => "gemini-2.0-flash",
            ModelKind::Deepseek => "deepseek-chat",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::ChatGpt => "ChatGPT",
            ModelKind::Gemini => "Gemini",
            ModelKind::Deepseek => "Deepseek",
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// Text-generation boundary consumed by the job-description extractor.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError>;
}

/// HTTP-backed LLM client with retry on rate limits and server errors.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    model: ModelKind,
    api_key: String,
}

impl LlmClient {
    pub fn new(model: ModelKind, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            model,
            api_key,
        }
    }

    /// Sends a prompt and returns the generated text.
    /// Retries on 429 and 5xx with exponential backoff (1s, 2s).
    async fn call(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request_body = CompletionRequest {
            model: self.model.model_name(),
            prompt,
            max_tokens,
            temperature,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(self.model.api_url())
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let completion: CompletionResponse = response.json().await?;
            let text = completion
                .choices
                .into_iter()
                .next()
                .map(|c| c.text)
                .ok_or(LlmError::EmptyContent)?;

            debug!(model = self.model.model_name(), chars = text.len(), "LLM call succeeded");
            return Ok(text);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        self.call(prompt, max_tokens, temperature).await
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
