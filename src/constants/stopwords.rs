use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Words that are never useful as quiz answers.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "of", "in", "on", "at", "to", "for", "with", "by", "from", "up", "about", "into", "through",
    "that", "this", "these", "those", "it", "its", "they", "them", "their", "he", "she", "we",
    "you", "i", "me", "my", "your", "our", "his", "her", "also", "which", "when", "where", "how",
    "what", "who", "as", "or", "and", "but", "if", "then", "than", "so", "not", "no", "nor",
    "each", "all", "both", "such", "more", "most", "other", "same", "only", "just", "very",
    "used", "using", "use", "uses", "make", "makes", "made", "give", "gives", "given",
    "known", "called", "said", "found", "show", "shows", "shown", "include", "includes",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_stopword_matches_lowercase_entries() {
        assert!(is_stopword("through"));
        assert!(is_stopword("includes"));
        assert!(!is_stopword("photosynthesis"));
    }

    #[test]
    fn test_every_listed_word_is_a_stopword() {
        assert!(STOPWORDS.iter().all(|w| is_stopword(w)));
        assert!(!is_stopword("The"));
    }
}
