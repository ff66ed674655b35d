use serde::Deserialize;
use validator::Validate;

pub const MAX_REQUESTED_ITEMS: usize = 50;

fn default_flashcard_count() -> usize {
    5
}

fn default_quiz_count() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    pub text: String,

    #[serde(default = "default_flashcard_count")]
    #[validate(range(max = MAX_REQUESTED_ITEMS))]
    pub n_flashcards: usize,

    #[serde(default = "default_quiz_count")]
    #[validate(range(max = MAX_REQUESTED_ITEMS))]
    pub n_quiz: usize,
}

impl GenerateRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            n_flashcards: default_flashcard_count(),
            n_quiz: default_quiz_count(),
        }
    }

    pub fn with_counts(mut self, n_flashcards: usize, n_quiz: usize) -> Self {
        self.n_flashcards = n_flashcards;
        self.n_quiz = n_quiz;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_when_counts_missing() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"text": "Cells divide."}"#).expect("request should parse");

        assert_eq!(request.n_flashcards, 5);
        assert_eq!(request.n_quiz, 5);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_oversized_counts() {
        let request = GenerateRequest::new("text").with_counts(MAX_REQUESTED_ITEMS + 1, 2);

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_accepts_counts_at_the_limit() {
        let request = GenerateRequest::new("text").with_counts(MAX_REQUESTED_ITEMS, MAX_REQUESTED_ITEMS);

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_accepts_zero_counts() {
        let request = GenerateRequest::new("text").with_counts(0, 0);

        assert!(request.validate().is_ok());
    }
}
