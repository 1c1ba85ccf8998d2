use crate::errors::SummarizeError;
use crate::summarize::{SummarizeResult, Summarizer};

const MAX_CHARS: usize = 200;

/// Offline stand-in for the language model: keeps the first sentence.
pub struct ExtractiveSummarizer;

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> Result<SummarizeResult, SummarizeError> {
        let first = text
            .split_inclusive(['.', '!', '?'])
            .map(str::trim)
            .find(|s| !s.is_empty())
            .ok_or(SummarizeError::EmptyResponse)?;
        let summary: String = first.chars().take(MAX_CHARS).collect();
        Ok(SummarizeResult {
            summary,
            backend: "extractive",
        })
    }
}
