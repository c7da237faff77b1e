//! Job-description extraction — fetches a posting's web page, strips it to
//! visible text, and asks the LLM for structured job details. The scoring
//! core never sees any of this structure: callers flatten the result to
//! plain text before handing it to the evaluator.

pub mod prompts;

use scraper::{Html, Node};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm::{strip_json_fences, LlmError, TextGenerator};

const FETCH_TIMEOUT_SECS: u64 = 10;
const EXTRACT_MAX_TOKENS: u32 = 500;
const EXTRACT_TEMPERATURE: f32 = 0.2;

/// Structured job details as returned by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    #[serde(default)]
    pub job_requirements: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub basic_requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub additional_details: Vec<String>,
}

impl JobDetails {
    /// Flattens every section into one newline-joined text block for the
    /// keyword extractor. The scorer has no JSON awareness of its own.
    pub fn flatten(&self) -> String {
        self.job_requirements
            .iter()
            .chain(&self.qualifications)
            .chain(&self.basic_requirements)
            .chain(&self.responsibilities)
            .chain(&self.additional_details)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Fetches the job posting's page. Non-2xx responses and transport failures
/// propagate as HTTP errors.
pub async fn fetch_webpage(url: &str) -> Result<String, AppError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;
    let html = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    info!(url, bytes = html.len(), "webpage fetched");
    Ok(html)
}

/// Extracts the visible text from an HTML document, skipping `<script>`,
/// `<style>`, and `<noscript>` subtrees. Segments join with newlines.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut segments = Vec::new();
    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| match a.value() {
            Node::Element(el) => matches!(el.name(), "script" | "style" | "noscript"),
            _ => false,
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
    }
    segments.join("\n")
}

/// Asks the model for structured job details from the posting's visible text.
/// Malformed (non-JSON) model output surfaces as an LLM parse error.
pub async fn extract_job_details<G: TextGenerator + ?Sized>(
    jd_text: &str,
    llm: &G,
) -> Result<JobDetails, AppError> {
    let prompt = prompts::JD_EXTRACT_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    let response = llm
        .generate(&prompt, EXTRACT_MAX_TOKENS, EXTRACT_TEMPERATURE)
        .await?;
    let details = parse_job_details(&response)?;
    info!(
        requirements = details.job_requirements.len(),
        qualifications = details.qualifications.len(),
        "job details extracted via LLM"
    );
    Ok(details)
}

/// Parses a model response into `JobDetails`, tolerating markdown fences.
pub fn parse_job_details(response: &str) -> Result<JobDetails, LlmError> {
    serde_json::from_str(strip_json_fences(response)).map_err(LlmError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubGenerator(String);

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_visible_text_skips_script_and_style() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
            <body><h1>Senior Rust Engineer</h1>
            <script>track("view");</script>
            <p>Build distributed systems.</p></body></html>"#;
        let text = visible_text(html);
        assert!(text.contains("Senior Rust Engineer"));
        assert!(text.contains("Build distributed systems."));
        assert!(!text.contains("track"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn test_visible_text_joins_segments_with_newlines() {
        let text = visible_text("<p>one</p><p>two</p>");
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn test_flatten_joins_all_sections() {
        let details = JobDetails {
            job_requirements: vec!["Rust".to_string()],
            qualifications: vec!["BSc".to_string()],
            basic_requirements: vec!["Python".to_string()],
            responsibilities: vec!["Build APIs".to_string()],
            additional_details: vec!["Remote".to_string()],
        };
        assert_eq!(details.flatten(), "Rust\nBSc\nPython\nBuild APIs\nRemote");
    }

    #[test]
    fn test_flatten_empty_details_is_empty_string() {
        assert_eq!(JobDetails::default().flatten(), "");
    }

    #[test]
    fn test_parse_job_details_with_fences_and_missing_sections() {
        let response = "```json\n{\"job_requirements\": [\"Rust\"]}\n```";
        let details = parse_job_details(response).unwrap();
        assert_eq!(details.job_requirements, vec!["Rust"]);
        assert!(details.qualifications.is_empty());
    }

    #[test]
    fn test_parse_job_details_rejects_non_json() {
        let err = parse_job_details("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_extract_job_details_via_stub_generator() {
        let stub = StubGenerator(
            r#"{"job_requirements": ["5+ years Rust"], "responsibilities": ["Own services"]}"#
                .to_string(),
        );
        let details = extract_job_details("some posting text", &stub).await.unwrap();
        assert_eq!(details.job_requirements, vec!["5+ years Rust"]);
        assert_eq!(details.responsibilities, vec!["Own services"]);
    }

    #[tokio::test]
    async fn test_extract_job_details_malformed_output_is_error() {
        let stub = StubGenerator("not json at all".to_string());
        let err = extract_job_details("text", &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Parse(_))));
    }
}
