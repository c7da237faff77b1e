//! Tokenization and keyword extraction — lowercase, strip punctuation,
//! split on whitespace, then filter stopwords and short tokens.

use std::collections::HashSet;

/// Common short/function words excluded from keyword matching.
/// A fixed constant, never mutated at runtime.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "to", "of", "a", "in", "for", "on", "with", "as", "by", "at", "an", "be", "this",
    "that", "from", "is", "are", "it", "or", "if", "you", "your", "i", "we", "us", "our",
];

/// ASCII punctuation deleted during normalization. Deleted, not replaced:
/// hyphenated compounds collapse into a single token.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Tokens shorter than this (in characters, not bytes) are discarded
/// during keyword extraction.
const MIN_KEYWORD_LEN: usize = 3;

/// Lowercases the text, deletes punctuation, and splits on whitespace runs.
/// Empty input produces an empty sequence; this never fails.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Extracts the deduplicated keyword sequence from `text`, preserving the
/// order in which each distinct keyword first appears. Criteria-side callers
/// rely on that order for reproducible matched/missing reports; resume-side
/// callers collapse the result into a set.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    normalize(text)
        .into_iter()
        .filter(|word| {
            word.chars().count() >= MIN_KEYWORD_LEN && !STOPWORDS.contains(&word.as_str())
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
