use rand::Rng;

use crate::constants::templates::{fallback_flashcard_question, fallback_quiz_stem};
use crate::models::domain::quiz_question::OPTION_COUNT;
use crate::models::domain::{Flashcard, StudyContent};
use crate::services::distractor_service::generate_distractors;
use crate::services::keyword_extractor::extract_keywords;
use crate::services::question_builder::assemble_question;
use crate::services::text_helpers::{collapse_whitespace, split_sentences, truncate_chars};

const MIN_SENTENCE_CHARS: usize = 30;
const MAX_SENTENCES: usize = 3;
const KEYWORD_COUNT: usize = 12;
const MAX_ITEMS: usize = 5;
const ANSWER_CHARS: usize = 200;
const STEM_CHARS: usize = 60;

/// Builds cards and questions straight from sentences and keywords when the text is too short
/// or too degenerate to chunk. Produces at most five of each, fewer if the caller asked for fewer.
pub fn emergency_content<R: Rng + ?Sized>(
    text: &str,
    n_flashcards: usize,
    n_quiz: usize,
    rng: &mut R,
) -> StudyContent {
    let flattened = collapse_whitespace(text);
    let sentences: Vec<&str> = split_sentences(&flattened)
        .into_iter()
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .take(MAX_SENTENCES)
        .collect();
    let keywords = extract_keywords(&flattened, KEYWORD_COUNT);

    let sentence_for = |i: usize| (!sentences.is_empty()).then(|| sentences[i % sentences.len()]);

    let flashcards = keywords
        .iter()
        .take(MAX_ITEMS.min(n_flashcards))
        .enumerate()
        .map(|(i, keyword)| {
            let answer = sentence_for(i).unwrap_or_else(|| truncate_chars(&flattened, ANSWER_CHARS));
            Flashcard::new(fallback_flashcard_question(keyword), answer)
        })
        .collect();

    let mut quiz = Vec::new();
    for (i, keyword) in keywords.iter().take(MAX_ITEMS.min(n_quiz)).enumerate() {
        let stem = fallback_quiz_stem(sentence_for(i).map(|s| truncate_chars(s, STEM_CHARS)));
        let distractors = generate_distractors(keyword, &keywords, OPTION_COUNT - 1, rng);
        quiz.push(assemble_question(stem, keyword, distractors, rng));
    }

    StudyContent {
        flashcards,
        quiz,
        fallback_used: true,
    }
}
