use async_trait::async_trait;

use crate::summarizers::{SummarizerError, Summarizer, SummaryLength};

/// Stands in when no summarization model is configured; every focus sentence then comes
/// from the local fallback.
pub struct UnavailableSummarizer;

#[async_trait]
impl Summarizer for UnavailableSummarizer {
    async fn summarize(&self, _text: &str, _length: SummaryLength) -> Result<String, SummarizerError> {
        Err(SummarizerError::Unavailable(
            "no summarizer configured".to_string(),
        ))
    }
}
