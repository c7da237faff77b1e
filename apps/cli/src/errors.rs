use thiserror::Error;

use crate::llm::LlmError;

/// Application-level error type.
/// Core scoring never produces these for missing or empty text — absent data
/// degrades to empty keyword sets and "Not found" fields. Errors here come
/// from the boundaries: files, HTTP, the PDF extractor, and the LLM.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
