use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::stopwords::is_stopword;

const CAPITALIZED_WEIGHT: f64 = 1.3;
const PLAIN_WEIGHT: f64 = 1.0;
const MIN_PHRASE_OCCURRENCES: usize = 2;
const MAX_PHRASES: usize = 2;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\-]").expect("NON_WORD is a valid regex pattern"));

/// Ranks candidate terms in `text`: up to two repeated two-word phrases first, then single
/// words by accumulated weight. Deterministic for a given input; results are lower-cased and
/// unique.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(text, " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let mut words = Tally::<f64>::default();
    for token in &tokens {
        let normalized = normalize(token);
        if !is_candidate(&normalized) {
            continue;
        }
        let weight = if token.chars().next().is_some_and(char::is_uppercase) {
            CAPITALIZED_WEIGHT
        } else {
            PLAIN_WEIGHT
        };
        words.add(normalized, weight);
    }

    let mut phrases = Tally::<usize>::default();
    for pair in tokens.windows(2) {
        let (first, second) = (normalize(pair[0]), normalize(pair[1]));
        if is_candidate(&first) && is_candidate(&second) {
            phrases.add(format!("{first} {second}"), 1);
        }
    }

    let top_phrases = phrases
        .ranked()
        .into_iter()
        .filter(|(_, count)| *count >= MIN_PHRASE_OCCURRENCES)
        .map(|(phrase, _)| phrase)
        .take(MAX_PHRASES);

    top_phrases
        .chain(words.ranked().into_iter().map(|(word, _)| word))
        .take(top_n)
        .collect()
}

fn normalize(token: &str) -> String {
    token.to_lowercase().trim_matches('-').to_string()
}

fn is_candidate(word: &str) -> bool {
    word.chars().count() > 3 && word.chars().all(char::is_alphabetic) && !is_stopword(word)
}

/// Accumulates scores per key while remembering first-encounter order for tie-breaking.
struct Tally<S> {
    order: Vec<(String, S)>,
    index: HashMap<String, usize>,
}

impl<S> Default for Tally<S> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S: Copy + PartialOrd + std::ops::AddAssign> Tally<S> {
    fn add(&mut self, key: String, amount: S) {
        match self.index.get(&key) {
            Some(&slot) => self.order[slot].1 += amount,
            None => {
                self.index.insert(key.clone(), self.order.len());
                self.order.push((key, amount));
            }
        }
    }

    /// Highest score first; equal scores keep encounter order.
    fn ranked(self) -> Vec<(String, S)> {
        let mut ranked = self.order;
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}
