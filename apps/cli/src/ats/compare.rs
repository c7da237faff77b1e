//! Two-resume comparison — scores each resume against the same criteria
//! independently and declares a winner by strict score comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ats::evaluator::{evaluate, Evaluation};

/// Which resume won the comparison, or a tie (including both-zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    First,
    Second,
    Tie,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::First => write!(f, "resume 1 has the better ATS match"),
            Verdict::Second => write!(f, "resume 2 has the better ATS match"),
            Verdict::Tie => write!(f, "both resumes have the same ATS score"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub first: Evaluation,
    pub second: Evaluation,
    pub verdict: Verdict,
}

/// Runs two independent evaluations against the same criteria text.
/// Keyword extraction is deterministic, so re-extracting the criteria per
/// run sees the identical keyword sequence.
pub fn compare(resume_text_a: &str, resume_text_b: &str, job_criteria_text: &str) -> Comparison {
    let first = evaluate(resume_text_a, job_criteria_text);
    let second = evaluate(resume_text_b, job_criteria_text);

    let verdict = if first.score > second.score {
        Verdict::First
    } else if second.score > first.score {
        Verdict::Second
    } else {
        Verdict::Tie
    };

    Comparison {
        first,
        second,
        verdict,
    }
}
