use crate::errors::SummarizeError;

#[derive(Debug, Clone)]
pub struct SummarizeResult {
    pub summary: String,
    pub backend: &'static str,
}

/// Condenses one review into a single sentence. Callers never pass empty text.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<SummarizeResult, SummarizeError>;
}

mod extractive;
mod openai;

pub fn build_summarizer(
    backend: &str,
    model: String,
    base_url: String,
    api_key: Option<String>,
) -> Box<dyn Summarizer> {
    match backend {
        "extractive" => Box::new(extractive::ExtractiveSummarizer),
        _ => Box::new(openai::OpenAiSummarizer::new(base_url, model, api_key)),
    }
}
