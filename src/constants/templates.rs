/// Replaces the answer keyword inside a cloze stem.
pub const BLANK_MARKER: &str = "__________";

/// Keyword used for a flashcard when a chunk yielded no keywords at all.
pub const DEFAULT_FLASHCARD_KEYWORD: &str = "this concept";

/// Keyword used for padding flashcards when a chunk yielded no keywords at all.
pub const PADDING_FLASHCARD_KEYWORD: &str = "topic";

/// Wrong answers of last resort, cycled in order once the keyword pool runs dry.
pub const GENERIC_FILLERS: [&str; 4] = [
    "none of the above",
    "all of the above",
    "cannot be determined from the text",
    "both A and B",
];

pub const FLASHCARD_TEMPLATE_COUNT: usize = 5;

pub fn flashcard_question(template: usize, keyword: &str) -> String {
    match template % FLASHCARD_TEMPLATE_COUNT {
        0 => format!("What does the document say about '{}'?", keyword),
        1 => format!("How is '{}' described in this topic?", keyword),
        2 => format!(
            "What is the significance of '{}' according to the text?",
            keyword
        ),
        3 => format!("Explain '{}' based on the content.", keyword),
        _ => format!("What role does '{}' play in this subject?", keyword),
    }
}

pub fn generic_quiz_stem(sentence_prefix: &str) -> String {
    format!(
        "According to the text, which of the following best relates to: '{}...'",
        sentence_prefix
    )
}

pub fn fallback_flashcard_question(keyword: &str) -> String {
    format!("What does the text say about '{}'?", keyword)
}

pub fn fallback_quiz_stem(sentence_prefix: Option<&str>) -> String {
    match sentence_prefix {
        Some(prefix) => format!("Which term from the document refers to: '{}...'?", prefix),
        None => "Which is a key concept from this document?".to_string(),
    }
}
