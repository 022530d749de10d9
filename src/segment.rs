//! Splitting raw text into ordered analysis segments.
//!
//! Two policies are supported:
//! - [`SegmentMethod::Sentences`] splits on sentence punctuation followed by
//!   whitespace (or on newline runs) and greedily bundles sentences until the
//!   bundle reaches a word threshold.
//! - [`SegmentMethod::Words`] cuts the whitespace-delimited words into fixed
//!   size chunks.
//!
//! Boundary detection is a heuristic: abbreviations, decimals and quoted
//! punctuation are not special-cased.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tokenize::word_count;

/// Smallest bundling threshold in sentence mode.
pub const MIN_SENTENCE_THRESHOLD: usize = 20;

/// Smallest chunk size in word mode.
pub const MIN_WORD_CHUNK: usize = 10;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+|\n+").expect("Invalid sentence boundary regex"));

/// Segmentation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMethod {
    /// Bundle whole sentences up to a word threshold.
    #[default]
    Sentences,
    /// Fixed-size word chunks.
    Words,
}

/// Splits text into segments according to a [`SegmentMethod`].
#[derive(Debug, Clone)]
pub struct Segmenter {
    method: SegmentMethod,
    words_per_chunk: usize,
}

impl Segmenter {
    pub fn new(method: SegmentMethod, words_per_chunk: usize) -> Self {
        Segmenter {
            method,
            words_per_chunk,
        }
    }

    /// The word count at which a sentence bundle is closed.
    pub fn sentence_threshold(&self) -> usize {
        self.words_per_chunk.max(MIN_SENTENCE_THRESHOLD)
    }

    /// The number of words per chunk in word mode.
    pub fn word_chunk(&self) -> usize {
        self.words_per_chunk.max(MIN_WORD_CHUNK)
    }

    /// Split `text` into segment texts. Returns nothing for blank input.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        match self.method {
            SegmentMethod::Sentences => {
                bundle_sentences(&split_sentences(text), self.sentence_threshold())
            }
            SegmentMethod::Words => chunk_words(text, self.word_chunk()),
        }
    }
}

/// Split text into trimmed, non-empty sentence-like units.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Keep the terminating punctuation with its sentence.
        let end = match boundary.as_str().as_bytes()[0] {
            b'.' | b'!' | b'?' => boundary.start() + 1,
            _ => boundary.start(),
        };
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Greedily join consecutive sentences until each bundle holds at least
/// `threshold` words. A trailing partial bundle is kept.
fn bundle_sentences(sentences: &[&str], threshold: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut bundle: Vec<&str> = Vec::new();
    let mut words = 0;

    for &sentence in sentences {
        bundle.push(sentence);
        words += word_count(sentence);
        if words >= threshold {
            segments.push(bundle.join(" "));
            bundle.clear();
            words = 0;
        }
    }
    if !bundle.is_empty() {
        segments.push(bundle.join(" "));
    }
    segments
}

fn chunk_words(text: &str, chunk_size: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.chunks(chunk_size).map(|chunk| chunk.join(" ")).collect()
}
