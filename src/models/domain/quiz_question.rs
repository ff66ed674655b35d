use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;

/// A four-option multiple choice question; `options[correct_index]` is the answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }

    /// True when exactly one option matches `answer` (ignoring case) and it sits at `correct_index`,
    /// and no two options repeat each other.
    pub fn is_consistent_with(&self, answer: &str) -> bool {
        let answer = answer.to_lowercase();
        let lowered: Vec<String> = self.options.iter().map(|o| o.to_lowercase()).collect();

        let matches = lowered.iter().filter(|o| **o == answer).count();
        let mut unique = lowered.clone();
        unique.sort();
        unique.dedup();

        self.options.len() == OPTION_COUNT
            && matches == 1
            && unique.len() == lowered.len()
            && lowered.get(self.correct_index) == Some(&answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuizQuestion {
        QuizQuestion {
            question: "__________ divides the cytoplasm.".to_string(),
            options: vec![
                "Prophase".to_string(),
                "Cytokinesis".to_string(),
                "Anaphase".to_string(),
                "Telophase".to_string(),
            ],
            correct_index: 1,
        }
    }

    #[test]
    fn quiz_question_serializes_correct_index_in_camel_case() {
        let json = serde_json::to_value(sample()).expect("question should serialize");

        assert_eq!(json["correctIndex"], 1);
        assert_eq!(json["options"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn quiz_question_consistency_is_case_insensitive() {
        let question = sample();

        assert_eq!(question.correct_option(), Some("Cytokinesis"));
        assert!(question.is_consistent_with("cytokinesis"));
        assert!(!question.is_consistent_with("anaphase"));
    }

    #[test]
    fn quiz_question_with_duplicate_options_is_inconsistent() {
        let mut question = sample();
        question.options[0] = "ANAPHASE".to_string();

        assert!(!question.is_consistent_with("cytokinesis"));
    }
}
