use std::sync::Arc;
use std::time::Duration;

use crate::services::text_helpers::{ends_with_terminal_punctuation, split_sentences, truncate_chars};
use crate::summarizers::{Summarizer, SummaryLength};

const FALLBACK_CHARS: usize = 120;

/// Reduces a chunk to one factual sentence, preferring the summarization model and falling
/// back to the chunk's own first sentence whenever the model fails, times out or returns nothing.
#[derive(Clone)]
pub struct FocusSentenceService {
    summarizer: Arc<dyn Summarizer>,
    length: SummaryLength,
    timeout: Duration,
}

impl FocusSentenceService {
    pub fn new(summarizer: Arc<dyn Summarizer>, length: SummaryLength, timeout: Duration) -> Self {
        Self {
            summarizer,
            length,
            timeout,
        }
    }

    pub async fn focus_sentence(&self, chunk_text: &str) -> String {
        match tokio::time::timeout(self.timeout, self.summarizer.summarize(chunk_text, self.length)).await {
            Ok(Ok(summary)) => {
                let summary = summary.trim();
                if summary.is_empty() {
                    log::warn!("Summarizer returned an empty sentence, using local fallback");
                    return fallback_sentence(chunk_text);
                }
                if ends_with_terminal_punctuation(summary) {
                    summary.to_string()
                } else {
                    format!("{}.", summary)
                }
            }
            Ok(Err(e)) => {
                log::warn!("Summarizer failed, using local fallback: {}", e);
                fallback_sentence(chunk_text)
            }
            Err(_) => {
                log::warn!(
                    "Summarizer timed out after {:?}, using local fallback",
                    self.timeout
                );
                fallback_sentence(chunk_text)
            }
        }
    }
}

/// First sentence of the chunk, or its first 120 characters when it has no sentence ending.
pub fn fallback_sentence(chunk_text: &str) -> String {
    match split_sentences(chunk_text).first() {
        Some(first) if ends_with_terminal_punctuation(first) => first.to_string(),
        _ => truncate_chars(chunk_text.trim(), FALLBACK_CHARS).trim().to_string(),
    }
}
