use rand::Rng;
use regex::RegexBuilder;

use crate::constants::templates::{
    flashcard_question, generic_quiz_stem, BLANK_MARKER, FLASHCARD_TEMPLATE_COUNT,
};
use crate::models::domain::quiz_question::OPTION_COUNT;
use crate::models::domain::{Flashcard, QuizQuestion};
use crate::services::distractor_service::generate_distractors;
use crate::services::text_helpers::{capitalize, truncate_chars};

const GENERIC_STEM_CHARS: usize = 80;

/// The question asks about `keyword`; the answer is the focus sentence itself.
pub fn build_flashcard<R: Rng + ?Sized>(sentence: &str, keyword: &str, rng: &mut R) -> Flashcard {
    let template = rng.gen_range(0..FLASHCARD_TEMPLATE_COUNT);
    Flashcard::new(flashcard_question(template, &capitalize(keyword)), sentence)
}

/// Cloze question: the first occurrence of `keyword` in `sentence` is blanked out and the
/// capitalised keyword hidden among three distractors drawn from `keyword_pool`.
pub fn build_quiz_question<R: Rng + ?Sized>(
    sentence: &str,
    keyword: &str,
    keyword_pool: &[String],
    rng: &mut R,
) -> QuizQuestion {
    let stem = cloze_stem(sentence, keyword)
        .unwrap_or_else(|| generic_quiz_stem(truncate_chars(sentence, GENERIC_STEM_CHARS)));

    let distractors = generate_distractors(keyword, keyword_pool, OPTION_COUNT - 1, rng);
    assemble_question(stem, keyword, distractors, rng)
}

/// Places the capitalised `keyword` at a uniformly random slot among `distractors`.
pub fn assemble_question<R: Rng + ?Sized>(
    question: String,
    keyword: &str,
    mut distractors: Vec<String>,
    rng: &mut R,
) -> QuizQuestion {
    distractors.truncate(OPTION_COUNT - 1);
    let correct_index = rng.gen_range(0..=distractors.len());
    distractors.insert(correct_index, capitalize(keyword));

    QuizQuestion {
        question,
        options: distractors,
        correct_index,
    }
}

fn cloze_stem(sentence: &str, keyword: &str) -> Option<String> {
    if keyword.trim().is_empty() {
        return None;
    }
    let pattern = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()?;

    pattern
        .is_match(sentence)
        .then(|| pattern.replace(sentence, BLANK_MARKER).into_owned())
}
