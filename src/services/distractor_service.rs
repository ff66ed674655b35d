use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::templates::GENERIC_FILLERS;
use crate::services::text_helpers::capitalize;

/// Largest length gap, in characters, for a pool entry to count as similar-looking.
const SIMILAR_LENGTH_SLACK: usize = 4;

/// Picks `count` wrong options for `correct_answer` from `keyword_pool`.
///
/// Entries of similar length are preferred, then any remaining pool entry, and only when the
/// pool runs dry are generic fillers used. None of the results equals the correct answer
/// (ignoring case), and pool-drawn results never repeat. The shuffle only varies which entries
/// win; the guarantees hold for any random source.
pub fn generate_distractors<R: Rng + ?Sized>(
    correct_answer: &str,
    keyword_pool: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let correct = correct_answer.trim().to_lowercase();

    let mut pool: Vec<&str> = Vec::with_capacity(keyword_pool.len());
    for keyword in keyword_pool {
        let lowered = keyword.trim().to_lowercase();
        if lowered.is_empty()
            || lowered == correct
            || pool.iter().any(|p| p.to_lowercase() == lowered)
        {
            continue;
        }
        pool.push(keyword.as_str());
    }
    pool.shuffle(rng);

    let target_len = correct_answer.chars().count();
    let is_similar = |k: &str| k.chars().count().abs_diff(target_len) <= SIMILAR_LENGTH_SLACK;

    let mut picked: Vec<&str> = pool.iter().copied().filter(|k| is_similar(*k)).take(count).collect();

    if picked.len() < count {
        let missing = count - picked.len();
        let rest: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|k| !picked.contains(k))
            .take(missing)
            .collect();
        picked.extend(rest);
    }

    let mut distractors: Vec<String> = picked.into_iter().map(capitalize).collect();

    let fillers = GENERIC_FILLERS
        .iter()
        .filter(|f| f.to_lowercase() != correct)
        .cycle();
    for filler in fillers.take(count.saturating_sub(distractors.len())) {
        distractors.push(capitalize(filler));
    }

    distractors
}
