//! Block identifier extraction.
//!
//! Passes, in order: prefixed tokens ("block 2", "tower-a"), standalone tokens equal
//! to a registered block, fuzzy matching against generated block variants, and
//! finally isolated single characters.

use super::fuzzy::{FuzzyIndex, FuzzyOptions};
use super::normalizer::tokenize;
use super::strategy::{ExtractionStrategy, StrategyChain};
use crate::domain::society::Society;
use lazy_static::lazy_static;
use regex::Regex;

const BLOCK_FUZZY_THRESHOLD: f64 = 0.3;
const MAX_FUZZY_TOKEN_LEN: usize = 15;
const BLOCK_PREFIXES: &[&str] = &["block", "b", "tower", "t", "blk", "bock"];

lazy_static! {
    static ref BLOCK_PREFIX: Regex =
        Regex::new(r"(?i)(?:block|blk|bock|b|tower|t)[- ]?([0-9a-z]+)").unwrap();
    static ref FLAT_MARKER: Regex = Regex::new(r"(?i)^(?:flat|fl|unit|#|no|room)").unwrap();
    static ref MULTI_DIGIT: Regex = Regex::new(r"^\d{3,}$").unwrap();
    static ref SINGLE_CHARACTER: Regex = Regex::new(r"\b([0-9A-Za-z])\b").unwrap();
    static ref DEFAULT_CHAIN: StrategyChain = block_chain();
}

/// Extracts a registered block of `society` from normalized address text.
pub fn extract_block<'s>(society: &'s Society, text: &str) -> Option<&'s str> {
    DEFAULT_CHAIN.extract(society, text)
}

pub fn block_chain() -> StrategyChain {
    StrategyChain::new(
        "block",
        vec![
            Box::new(PrefixedBlock),
            Box::new(StandaloneBlock),
            Box::new(FuzzyBlockVariant),
            Box::new(SingleCharacterBlock),
        ],
    )
}

/// "block 2", "blk-a", "tower vivo": the prefix is dropped and the rest looked up.
pub struct PrefixedBlock;

impl ExtractionStrategy for PrefixedBlock {
    fn name(&self) -> &'static str {
        "prefixed"
    }

    fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str> {
        BLOCK_PREFIX
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|suffix| society.find_block(suffix.as_str()))
    }
}

/// A token equal to a block; bare runs of three or more digits are flats, not blocks.
pub struct StandaloneBlock;

impl ExtractionStrategy for StandaloneBlock {
    fn name(&self) -> &'static str {
        "standalone"
    }

    fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str> {
        tokenize(text)
            .into_iter()
            .filter(|token| !MULTI_DIGIT.is_match(token))
            .find_map(|token| society.find_block(token))
    }
}

/// Tolerates typos and odd spellings by searching the tokens against every common
/// way of writing each block.
pub struct FuzzyBlockVariant;

impl FuzzyBlockVariant {
    fn index(society: &Society) -> FuzzyIndex<&str> {
        let mut index = FuzzyIndex::new(FuzzyOptions::new(BLOCK_FUZZY_THRESHOLD).ignore_location());
        for block in &society.blocks {
            index.extend(
                block_variants(block)
                    .into_iter()
                    .map(|variant| (variant, block.as_str())),
            );
        }
        index
    }

    fn skip(token: &str) -> bool {
        FLAT_MARKER.is_match(token)
            || MULTI_DIGIT.is_match(token)
            || token.chars().count() > MAX_FUZZY_TOKEN_LEN
    }
}

impl ExtractionStrategy for FuzzyBlockVariant {
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

/// Last resort: a lone letter or digit such as the "b" in "sunrise park, b".
pub struct SingleCharacterBlock;

impl ExtractionStrategy for SingleCharacterBlock {
    fn name(&self) -> &'static str {
        "single_character"
    }

    fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str> {
        SINGLE_CHARACTER
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|single| society.find_block(single.as_str()))
    }
}

fn block_variants(block: &str) -> Vec<String> {
    let mut variants = vec![block.to_string()];
    for prefix in BLOCK_PREFIXES {
        variants.push(format!("{prefix} {block}"));
        variants.push(format!("{prefix}-{block}"));
    }
    variants.push(format!("{block} block"));
    variants.push(format!("{block}block"));
    variants.push(format!("{block}-"));
    variants.push(format!("-{block}"));
    variants.push(block.to_lowercase());
    variants.push(block.to_uppercase());
    variants
}
