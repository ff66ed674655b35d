pub mod http_summarizer;
pub mod unavailable_summarizer;

pub use http_summarizer::HttpSummarizer;
pub use unavailable_summarizer::UnavailableSummarizer;

use async_trait::async_trait;

/// Token band requested from the summarization model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLength {
    pub min_tokens: u32,
    pub max_tokens: u32,
}

impl Default for SummaryLength {
    fn default() -> Self {
        Self {
            min_tokens: 20,
            max_tokens: 60,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("summarizer unavailable: {0}")]
    Unavailable(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("empty summary")]
    EmptySummary,
}

/// External summarization model, reduced to the one call the pipeline needs.
/// Built and torn down by the surrounding service, never by the pipeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, SummarizerError>;
}
