// src/analysis/mod.rs
pub mod report;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::extractors::{Findings, StructureAnalyzer};

/// Sentences need more than this many words to count as key sentences.
const KEY_SENTENCE_MIN_WORDS: usize = 5;
const KEY_SENTENCE_LIMIT: usize = 5;

/// Everything the report is built from, computed once per input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub word_count: usize,
    pub findings: Findings,
    pub key_sentences: Vec<String>,
}

impl Analysis {
    pub fn of(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            findings: StructureAnalyzer::new().scan(text),
            key_sentences: key_sentences(text),
        }
    }
}

/// Formats the analysis report for `text`, stamped with the local time.
pub fn analyze(text: &str) -> String {
    analyze_at(text, Local::now().naive_local())
}

pub fn analyze_at(text: &str, analyzed_at: NaiveDateTime) -> String {
    report::render(&Analysis::of(text), analyzed_at)
}

/// First few sentences (split on `.`, `!`, `?`) long enough to carry content.
fn key_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.split_whitespace().count() > KEY_SENTENCE_MIN_WORDS)
        .take(KEY_SENTENCE_LIMIT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_sentences_skip_short_ones() {
        let text = "Short one. This sentence has exactly six words! Tiny? \
                    Another qualifying sentence with enough words here";
        assert_eq!(
            key_sentences(text),
            vec![
                "This sentence has exactly six words".to_string(),
                "Another qualifying sentence with enough words here".to_string(),
            ]
        );
    }

    #[test]
    fn test_key_sentences_capped_at_five() {
        let text = "one two three four five six. ".repeat(8);
        assert_eq!(key_sentences(&text).len(), KEY_SENTENCE_LIMIT);
    }

    #[test]
    fn test_analysis_counts_words() {
        let analysis = Analysis::of("  The Buyer\tshall pay\n$10.  ");
        assert_eq!(analysis.word_count, 5);
        assert_eq!(analysis.findings.payments, vec!["$10".to_string()]);
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        let analysis = Analysis::of("");
        assert_eq!(analysis.word_count, 0);
        assert!(analysis.key_sentences.is_empty());
    }

    #[test]
    fn test_repeated_analysis_finds_the_same_set() {
        let text = "The Tenant shall pay $1,200.00 monthly, starting 01/02/2025.";
        let first = Analysis::of(text);
        let second = Analysis::of(text);
        assert_eq!(first.findings, second.findings);
        assert!(analyze(text).contains("$1,200.00"));
    }
}
