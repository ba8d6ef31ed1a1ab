use super::fuzzy::{FuzzyIndex, FuzzyOptions};
use super::normalizer::tokenize;
use crate::domain::society::{Society, SocietyRegistry};

/// Lenient: a society is accepted down to 30% confidence.
const SOCIETY_THRESHOLD: f64 = 0.7;
const SOCIETY_MIN_MATCH_LEN: usize = 3;
/// Words this short are too ambiguous for the per-word retry.
const MIN_FALLBACK_WORD_LEN: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct SocietyMatch<'a> {
    pub society: &'a Society,
    /// Confidence in `[0, 1]`, `1.0` meaning the name appears verbatim
    pub similarity: f64,
}

/// Finds the society whose name best matches the normalized address text.
///
/// The whole text is compared first, word by word against each society name. When no
/// society clears the threshold every word longer than three characters is retried on
/// its own as an approximate substring of the names, and the first word that hits
/// wins. Ties keep registry order.
pub fn match_society<'a>(registry: &'a SocietyRegistry, normalized: &str) -> Option<SocietyMatch<'a>> {
    if registry.is_empty() {
        return None;
    }

    let options = FuzzyOptions::new(SOCIETY_THRESHOLD).min_match_len(SOCIETY_MIN_MATCH_LEN);

    let mut by_phrase = FuzzyIndex::new(options.token_set());
    let mut by_word = FuzzyIndex::new(options);
    for society in registry.iter() {
        by_phrase.insert(society.name.as_str(), society);
        by_word.insert(society.name.as_str(), society);
    }

    if let Some(hit) = by_phrase.search(normalized) {
        tracing::debug!(society = %hit.value.name, score = hit.score, "society matched on full text");
        return Some(SocietyMatch {
            society: hit.value,
            similarity: hit.similarity(),
        });
    }

    tokenize(normalized)
        .into_iter()
        .filter(|word| word.chars().count() >= MIN_FALLBACK_WORD_LEN)
        .find_map(|word| {
            let hit = by_word.search(word)?;
            tracing::debug!(society = %hit.value.name, word, score = hit.score, "society matched on single word");
            Some(SocietyMatch {
                society: hit.value,
                similarity: hit.similarity(),
            })
        })
}
