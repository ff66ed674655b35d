use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::domain::{Flashcard, QuizQuestion};

/// What one pipeline run produces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyContent {
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
    /// Set when the document was too short to chunk and the emergency path produced the content.
    #[serde(default)]
    pub fallback_used: bool,
}

impl StudyContent {
    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty() && self.quiz.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudySet {
    pub id: String,
    pub source_fingerprint: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
    pub fallback_used: bool,
    pub generated_at: DateTime<Utc>,
}

impl StudySet {
    pub fn new(source_text: &str, content: StudyContent) -> Self {
        StudySet {
            id: Uuid::new_v4().to_string(),
            source_fingerprint: fingerprint(source_text),
            flashcards: content.flashcards,
            quiz: content.quiz,
            fallback_used: content.fallback_used,
            generated_at: Utc::now(),
        }
    }
}

/// Hex SHA-256 of the source text, so collaborators can recognise regenerated documents.
pub fn fingerprint(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let a = fingerprint("Mitosis is a type of cell division.");
        let b = fingerprint("Mitosis is a type of cell division.");

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, fingerprint("Meiosis"));
    }

    #[test]
    fn test_study_set_wraps_content() {
        let content = StudyContent {
            flashcards: vec![Flashcard::new("Q?", "A.")],
            quiz: vec![],
            fallback_used: true,
        };

        let set = StudySet::new("source", content);
        assert_eq!(set.flashcards.len(), 1);
        assert!(set.quiz.is_empty());
        assert!(set.fallback_used);
        assert!(Uuid::parse_str(&set.id).is_ok());
    }

    #[test]
    fn test_empty_content() {
        assert!(StudyContent::default().is_empty());
    }
}
