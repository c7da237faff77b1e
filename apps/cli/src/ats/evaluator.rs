//! ATS evaluation — compares resume keywords against job criteria keywords
//! and produces a 0–100 score with matched/missing keyword lists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::keywords::extract_keywords;

/// Result of scoring one resume against one set of job criteria.
/// `matched` and `missing` follow the order in which each distinct keyword
/// first appears in the criteria text; together they cover every criteria
/// keyword exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Percentage of criteria keywords found in the resume, 0–100,
    /// rounded to two decimals.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Scores `resume_text` against `job_criteria_text`.
///
/// Empty or missing text on either side is a defined outcome, not an error:
/// an empty criteria set yields score 0 with both lists empty.
pub fn evaluate(resume_text: &str, job_criteria_text: &str) -> Evaluation {
    let criteria_keywords = extract_keywords(job_criteria_text);
    debug!(keywords = ?criteria_keywords, "extracted job criteria keywords");

    let resume_keywords: HashSet<String> = extract_keywords(resume_text).into_iter().collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for keyword in criteria_keywords {
        if resume_keywords.contains(&keyword) {
            matched.push(keyword);
        } else {
            missing.push(keyword);
        }
    }

    let total = matched.len() + missing.len();
    let score = if total > 0 {
        round2(matched.len() as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    Evaluation {
        score,
        matched,
        missing,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
