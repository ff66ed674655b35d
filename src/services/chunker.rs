use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::Chunk;
use crate::services::text_helpers::{collapse_whitespace, split_sentences};

const MIN_PARAGRAPH_CHARS: usize = 80;
const MIN_SENTENCE_CHARS: usize = 60;

static NON_ASCII: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").expect("NON_ASCII is a valid regex pattern"));
static LEADING_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[^\w\n]+").expect("LEADING_BULLET is a valid regex pattern"));
static INLINE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\r\f\v]+").expect("INLINE_WHITESPACE is a valid regex pattern"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("PARAGRAPH_BREAK is a valid regex pattern"));

#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_chars: usize,
    max_chunks: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(800, 10)
    }
}

impl Chunker {
    pub fn new(max_chars: usize, max_chunks: usize) -> Self {
        Self {
            max_chars,
            max_chunks,
        }
    }

    /// Splits `text` into at most `max_chunks` topic-sized chunks, in document order.
    ///
    /// Paragraphs (blank-line separated, longer than 80 characters) are the preferred unit;
    /// when none survive, sentences longer than 60 characters are used instead. Units are
    /// merged greedily while the running buffer stays under `max_chars`.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let cleaned = clean(text);

        let mut units: Vec<String> = PARAGRAPH_BREAK
            .split(&cleaned)
            .map(collapse_whitespace)
            .filter(|p| p.len() > MIN_PARAGRAPH_CHARS)
            .collect();

        if units.is_empty() {
            let flattened = collapse_whitespace(&cleaned);
            units = split_sentences(&flattened)
                .into_iter()
                .filter(|s| s.len() > MIN_SENTENCE_CHARS)
                .map(str::to_string)
                .collect();
        }

        self.merge(units)
    }

    fn merge(&self, units: Vec<String>) -> Vec<Chunk> {
        let mut chunks: Vec<String> = Vec::new();
        let mut buffer = String::new();

        for unit in units {
            if buffer.len() + unit.len() < self.max_chars {
                buffer.push(' ');
                buffer.push_str(&unit);
            } else {
                flush(&mut chunks, &buffer);
                buffer = unit;
            }
        }
        flush(&mut chunks, &buffer);

        chunks
            .into_iter()
            .take(self.max_chunks)
            .enumerate()
            .map(|(index, text)| Chunk::new(index, text))
            .collect()
    }
}

fn flush(chunks: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Drops non-ASCII runs and leading bullet characters, and collapses whitespace inside lines.
/// Line breaks survive so that paragraph boundaries can still be found.
fn clean(text: &str) -> String {
    let ascii = NON_ASCII.replace_all(text, " ");
    let unbulleted = LEADING_BULLET.replace_all(&ascii, "");
    let collapsed = INLINE_WHITESPACE.replace_all(&unbulleted, " ");
    collapsed
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}
