use crate::errors::SummarizeError;
use crate::summarize::{SummarizeResult, Summarizer};
use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiSummarizer {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: Client,
}

impl OpenAiSummarizer {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            base_url,
            model,
            api_key,
            client: Client::new(),
        }
    }
}

impl Summarizer for OpenAiSummarizer {
    fn summarize(&self, text: &str) -> Result<SummarizeResult, SummarizeError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(SummarizeError::MissingCredential("OPENAI_API_KEY"))?;

        let prompt = format!("Summarize this review in one sentence:\n\n{text}");
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| SummarizeError::Http(format!("connect {}: {}", self.base_url, e)))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SummarizeError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let completion: ChatCompletion = resp
            .json()
            .map_err(|e| SummarizeError::Decode(format!("decode response: {e}")))?;
        let summary = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(SummarizeError::EmptyResponse)?;
        Ok(SummarizeResult {
            summary,
            backend: "openai",
        })
    }
}
