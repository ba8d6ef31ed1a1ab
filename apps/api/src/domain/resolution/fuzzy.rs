//! Approximate string matching for the society matcher and the block/flat
//! variation passes.
//!
//! Scores follow the usual fuzzy-search convention: `0.0` is a perfect match and
//! `1.0` a complete mismatch. A candidate is a hit when its score is at or below the
//! configured threshold; [`FuzzyHit::similarity`] flips the scale for callers that
//! think in confidence.
//!
//! Two scoring modes are available:
//! - [`MatchMode::Substring`] looks for the pattern anywhere inside the key, allowing
//!   edits. The error count is normalized by the pattern length and, unless location
//!   is ignored, a small penalty proportional to how far into the key the best
//!   alignment starts is added.
//! - [`MatchMode::TokenSet`] splits the key into words, scores each word as a
//!   substring of the query and averages the per-word scores (a missing word scores
//!   `1.0`). Word order and extra words in the query do not matter.

use super::normalizer::tokenize;
use strsim::generic_levenshtein;

/// Characters of offset that cost a full point of score when location matters.
const LOCATION_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Substring,
    TokenSet,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyOptions {
    /// Highest score still considered a hit
    pub threshold: f64,
    /// Minimum run of identical characters that pattern and key must share
    pub min_match_len: usize,
    pub ignore_location: bool,
    pub mode: MatchMode,
}

impl FuzzyOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            min_match_len: 1,
            ignore_location: false,
            mode: MatchMode::Substring,
        }
    }

    pub fn min_match_len(mut self, len: usize) -> Self {
        self.min_match_len = len;
        self
    }

    pub fn ignore_location(mut self) -> Self {
        self.ignore_location = true;
        self
    }

    pub fn token_set(mut self) -> Self {
        self.mode = MatchMode::TokenSet;
        self
    }
}

/// Scores `pattern` as an approximate substring of `text`.
pub fn substring_score(pattern: &str, text: &str, options: &FuzzyOptions) -> Option<f64> {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();
    if pattern.is_empty() || text.is_empty() {
        return None;
    }

    let required = options
        .min_match_len
        .min(pattern.len())
        .min(text.len())
        .max(1);
    if longest_common_run(&pattern, &text) < required {
        return None;
    }

    let (errors, start) = best_window(&pattern, &text, options.threshold);
    let mut score = errors as f64 / pattern.len() as f64;
    if !options.ignore_location {
        score += start as f64 / LOCATION_DISTANCE;
    }
    let score = score.min(1.0);

    (score <= options.threshold).then_some(score)
}

/// Scores every word of `key` against `query` and averages the results.
pub fn token_set_score(query: &str, key: &str, options: &FuzzyOptions) -> Option<f64> {
    let words = tokenize(key);
    if words.is_empty() {
        return None;
    }

    let per_word = FuzzyOptions {
        threshold: 1.0,
        ignore_location: true,
        mode: MatchMode::Substring,
        ..*options
    };
    let total: f64 = words
        .iter()
        .map(|word| substring_score(word, query, &per_word).unwrap_or(1.0))
        .sum();
    let score = total / words.len() as f64;

    (score <= options.threshold).then_some(score)
}

fn longest_common_run(a: &[char], b: &[char]) -> usize {
    let mut best = 0;
    let mut previous = vec![0usize; b.len() + 1];
    for &left in a {
        let mut current = vec![0usize; b.len() + 1];
        for (j, &right) in b.iter().enumerate() {
            if left == right {
                current[j + 1] = previous[j] + 1;
                best = best.max(current[j + 1]);
            }
        }
        previous = current;
    }
    best
}

/// Returns `(errors, start)` of the window of `text` closest to `pattern`.
///
/// Windows whose length differs from the pattern by more than the error budget can
/// never clear the threshold, so only lengths inside that band are tried.
fn best_window(pattern: &[char], text: &[char], threshold: f64) -> (usize, usize) {
    let needle = pattern.to_vec();
    let slack = (pattern.len() as f64 * threshold).ceil() as usize;
    let shortest = pattern.len().saturating_sub(slack).clamp(1, text.len());
    let longest = (pattern.len() + slack).clamp(shortest, text.len());

    let mut window: Vec<char> = Vec::with_capacity(longest);
    let mut best = (usize::MAX, 0);
    for len in shortest..=longest {
        for start in 0..=text.len() - len {
            window.clear();
            window.extend_from_slice(&text[start..start + len]);
            let candidate = (generic_levenshtein(&needle, &window), start);
            if candidate < best {
                best = candidate;
            }
        }
    }
    best
}

#[derive(Debug)]
pub struct FuzzyHit<'a, T> {
    pub key: &'a str,
    pub value: &'a T,
    pub score: f64,
}

impl<T> FuzzyHit<'_, T> {
    pub fn similarity(&self) -> f64 {
        1.0 - self.score
    }
}

/// A small in-memory fuzzy index mapping searchable keys to payloads.
///
/// Searches are linear; the index is meant for a handful of societies or a few
/// dozen block/flat variants. Keys are compared case-insensitively and ties go to
/// the entry inserted first.
#[derive(Debug, Clone)]
pub struct FuzzyIndex<T> {
    options: FuzzyOptions,
    entries: Vec<(String, T)>,
}

impl<T> FuzzyIndex<T> {
    pub fn new(options: FuzzyOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.entries.push((key.into().to_lowercase(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search(&self, pattern: &str) -> Option<FuzzyHit<'_, T>> {
        let pattern = pattern.to_lowercase();
        let mut best: Option<FuzzyHit<'_, T>> = None;

        for (key, value) in &self.entries {
            let score = match self.options.mode {
                MatchMode::Substring => substring_score(&pattern, key, &self.options),
                MatchMode::TokenSet => token_set_score(&pattern, key, &self.options),
            };
            let Some(score) = score else { continue };

            if best.as_ref().is_none_or(|hit| score < hit.score) {
                best = Some(FuzzyHit {
                    key: key.as_str(),
                    value,
                    score,
                });
            }
        }

        best
    }
}

impl<T> Extend<(String, T)> for FuzzyIndex<T> {
    fn extend<I: IntoIterator<Item = (String, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
