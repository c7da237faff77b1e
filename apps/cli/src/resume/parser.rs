//! Resume parsing — PDF text extraction plus labeled-field recovery
//! (name/email/phone) from the raw text.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

/// Placeholder value for a field whose label or pattern is absent.
/// A data value, not an error signal.
pub const NOT_FOUND: &str = "Not found";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name:\s*(.+)").expect("valid name regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| {
        // Local part, @, and a domain with at least one dot.
        Regex::new(r"Email:\s*([\w.-]+@[\w-]+(?:\.[\w-]+)+)").expect("valid email regex")
    });
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Phone:\s*([\d\-+()\s]+)").expect("valid phone regex"));

/// Key contact fields recovered from a resume. Fields are independent:
/// one missing label never blocks the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Extracts the full text of a PDF resume. Extraction failures propagate;
/// the scoring core only ever consumes the resulting string.
pub fn extract_text(path: &Path) -> Result<String, AppError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| AppError::Pdf(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), chars = text.len(), "extracted text from PDF");
    Ok(text)
}

/// Applies the labeled-field patterns over the raw (non-lowercased) text.
/// Read-only and idempotent; an empty input yields all fields "Not found".
pub fn parse_fields(raw_text: &str) -> ResumeFields {
    ResumeFields {
        name: capture_line(&NAME_RE, raw_text),
        email: capture_line(&EMAIL_RE, raw_text),
        phone: capture_line(&PHONE_RE, raw_text),
    }
}

fn capture_line(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Name: John Doe\nEmail: john.doe@example.com\nPhone: +1 555 123 4567\n";

    #[test]
    fn test_parse_fields_full_sample() {
        let fields = parse_fields(SAMPLE);
        assert_eq!(fields.name, "John Doe");
        assert_eq!(fields.email, "john.doe@example.com");
        assert_eq!(fields.phone, "+1 555 123 4567");
    }

    #[test]
    fn test_parse_fields_empty_text_defaults() {
        let fields = parse_fields("");
        assert_eq!(
            fields,
            ResumeFields {
                name: NOT_FOUND.to_string(),
                email: NOT_FOUND.to_string(),
                phone: NOT_FOUND.to_string(),
            }
        );
    }

    #[test]
    fn test_fields_are_independent() {
        let fields = parse_fields("Email: jane@company.io\nSummary: systems engineer");
        assert_eq!(fields.name, NOT_FOUND);
        assert_eq!(fields.email, "jane@company.io");
        assert_eq!(fields.phone, NOT_FOUND);
    }

    #[test]
    fn test_name_captures_to_end_of_line_trimmed() {
        let fields = parse_fields("Name:   Ada Lovelace  \nTitle: Analyst");
        assert_eq!(fields.name, "Ada Lovelace");
    }

    #[test]
    fn test_email_requires_mailbox_shape() {
        // "Email:" followed by prose without an @ must not match.
        let fields = parse_fields("Email: available upon request");
        assert_eq!(fields.email, NOT_FOUND);
    }

    #[test]
    fn test_email_domain_needs_a_dot() {
        let fields = parse_fields("Email: root@localhost");
        assert_eq!(fields.email, NOT_FOUND);
    }

    #[test]
    fn test_phone_stops_at_non_phone_characters() {
        let fields = parse_fields("Phone: (020) 7946-0958 ext nothing");
        assert_eq!(fields.phone, "(020) 7946-0958");
    }

    #[test]
    fn test_parse_fields_idempotent() {
        assert_eq!(parse_fields(SAMPLE), parse_fields(SAMPLE));
    }

    #[test]
    fn test_extract_text_missing_file_is_error() {
        let err = extract_text(Path::new("does/not/exist.pdf")).unwrap_err();
        assert!(matches!(err, AppError::Pdf(_)));
    }
}
