use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_SEPARATORS: Regex = Regex::new(r"[\s,.\-]+").unwrap();
}

/// Lowercases and trims raw address text. Punctuation is left for the tokenizers.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits text on whitespace, commas, periods and hyphens, dropping empty pieces.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_SEPARATORS
        .split(text)
        .filter(|token| !token.is_empty())
        .collect()
}
