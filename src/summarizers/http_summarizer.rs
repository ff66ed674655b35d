use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::prompts::FOCUS_SENTENCE_INSTRUCTION;
use crate::summarizers::{SummarizerError, Summarizer, SummaryLength};

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    instruction: &'a str,
    text: &'a str,
    min_length: u32,
    max_length: u32,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Talks to a summarization model served over HTTP.
///
/// Request body: `{"instruction", "text", "min_length", "max_length"}`; the service must
/// answer with `{"summary": "..."}`.
pub struct HttpSummarizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpSummarizer {
    pub fn new(endpoint: impl Into<String>, api_key: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, SummarizerError> {
        let body = SummarizeRequest {
            instruction: FOCUS_SENTENCE_INSTRUCTION,
            text,
            min_length: length.min_tokens,
            max_length: length.max_tokens,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummarizerError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizerError::RequestFailed(format!(
                "summarizer responded with {}",
                status
            )));
        }

        let parsed: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        let summary = parsed.summary.trim();
        if summary.is_empty() {
            return Err(SummarizerError::EmptySummary);
        }
        Ok(summary.to_string())
    }
}
