//! Flat identifier extraction: prefixed numbers, bare three-digit numbers, then
//! fuzzy matching against generated flat variants.

use super::fuzzy::{FuzzyIndex, FuzzyOptions};
use super::normalizer::tokenize;
use super::strategy::{ExtractionStrategy, StrategyChain};
use crate::domain::society::Society;
use lazy_static::lazy_static;
use regex::Regex;

const FLAT_FUZZY_THRESHOLD: f64 = 0.4;
const FLAT_MIN_MATCH_LEN: usize = 2;

lazy_static! {
    static ref FLAT_PREFIX: Regex =
        Regex::new(r"(?i)(?:flat|fl|unit|#|no|room|^)\s*(\d{2,4})\b").unwrap();
    static ref BARE_FLAT_NUMBER: Regex = Regex::new(r"\b\d{3}\b").unwrap();
    static ref MARKER_WORD: Regex = Regex::new(r"(?i)^(?:flat|fl|unit|#|no|number|room)$").unwrap();
    static ref DEFAULT_CHAIN: StrategyChain = flat_chain();
}

/// Extracts a registered flat of `society` from normalized address text.
pub fn extract_flat<'s>(society: &'s Society, text: &str) -> Option<&'s str> {
    DEFAULT_CHAIN.extract(society, text)
}

pub fn flat_chain() -> StrategyChain {
    StrategyChain::new(
        "flat",
        vec![
            Box::new(PrefixedFlat),
            Box::new(BareFlatNumber),
            Box::new(FuzzyFlatVariant),
        ],
    )
}

/// "flat 102", "#203", "room 101", or a number leading the text.
pub struct PrefixedFlat;

impl ExtractionStrategy for PrefixedFlat {
    fn name(&self) -> &'static str {
        "prefixed"
    }

    fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str> {
        FLAT_PREFIX
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|number| society.find_flat(number.as_str()))
    }
}

/// Any standalone three-digit number, in the order it appears.
pub struct BareFlatNumber;

impl ExtractionStrategy for BareFlatNumber {
    fn name(&self) -> &'static str {
        "bare_number"
    }

    fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str> {
        BARE_FLAT_NUMBER
            .find_iter(text)
            .find_map(|number| society.find_flat(number.as_str()))
    }
}

pub struct FuzzyFlatVariant;

impl FuzzyFlatVariant {
    fn index(society: &Society) -> FuzzyIndex<&str> {
        let mut index = FuzzyIndex::new(
            FuzzyOptions::new(FLAT_FUZZY_THRESHOLD).min_match_len(FLAT_MIN_MATCH_LEN),
        );
        for flat in &society.flats_in_each_block {
            index.extend(
                flat_variants(flat)
                    .into_iter()
                    .map(|variant| (variant, flat.as_str())),
            );
        }
        index
    }

    /// A marker on its own ("flat", "no") names no flat, though it equals the
    /// prefix of every variant.
    fn skip(token: &str) -> bool {
        MARKER_WORD.is_match(token)
    }
}

impl ExtractionStrategy for FuzzyFlatVariant {
    fn name(&self) -> &'static str {
        "fuzzy_variant"
    }

    fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str> {
        let index = Self::index(society);
        tokenize(text)
            .into_iter()
            .filter(|token| !Self::skip(token))
            .find_map(|token| index.search(token).map(|hit| *hit.value))
    }
}

fn flat_variants(flat: &str) -> Vec<String> {
    vec![
        flat.to_string(),
        format!("flat {flat}"),
        format!("flat-{flat}"),
        format!("fl {flat}"),
        format!("fl-{flat}"),
        format!("unit {flat}"),
        format!("unit-{flat}"),
        format!("#{flat}"),
        format!("no {flat}"),
        format!("no-{flat}"),
        format!("number {flat}"),
        format!("room {flat}"),
        format!("room-{flat}"),
        format!("-{flat}"),
        format!("{flat}-"),
    ]
}
