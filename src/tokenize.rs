//! Word tokenization for lexicon lookup.
//!
//! A token is a maximal run of ASCII letters and apostrophes. Digits,
//! punctuation, whitespace and non-ASCII characters all separate tokens.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z']+").expect("Invalid word regex"));

/// Extract lowercase word tokens from `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Count whitespace-delimited words, the unit used for chunk sizing.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
