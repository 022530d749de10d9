//! The segmentation and scoring pass.
//!
//! [`analyze`] turns raw text into an [`AnalysisResult`]: one row per
//! segment, each holding the segment and its [`ScoreVector`]. A result is
//! built in one pass and never modified afterwards.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::rank::{mean_scores, EmotionMean};
use crate::smooth::moving_average;
use crate::{
    score_tokens, tokenize, AnalysisConfig, AnalysisError, Emotion, Lexicon, ScoreVector,
    TimelineResult,
};

/// Number of characters kept in a segment preview.
pub const PREVIEW_CHARS: usize = 140;

/// One contiguous span of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// 1-based position in the result.
    pub index: usize,
    pub text: String,
    /// At most [`PREVIEW_CHARS`] characters from the start of `text`, cut
    /// on a grapheme boundary.
    pub preview: String,
}

impl Segment {
    pub fn new(index: usize, text: String) -> Self {
        let mut preview = String::new();
        let mut chars = 0;
        for grapheme in text.graphemes(true) {
            chars += grapheme.chars().count();
            if chars > PREVIEW_CHARS {
                break;
            }
            preview.push_str(grapheme);
        }
        Segment {
            index,
            text,
            preview,
        }
    }
}

/// A segment with its scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub segment: Segment,
    pub scores: ScoreVector,
}

/// Ordered rows from a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    emotions: Vec<Emotion>,
    rows: Vec<TimelineRow>,
}

impl AnalysisResult {
    /// Score already-segmented texts. Indices are assigned from 1.
    pub fn from_segments<I>(segments: I, lexicon: &Lexicon) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let rows = segments
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let scores = score_tokens(&tokenize(&text), lexicon);
                TimelineRow {
                    segment: Segment::new(i + 1, text),
                    scores,
                }
            })
            .collect();
        AnalysisResult {
            emotions: lexicon.emotions().collect(),
            rows,
        }
    }

    /// Emotion columns, in declaration order.
    pub fn emotions(&self) -> &[Emotion] {
        &self.emotions
    }

    pub fn rows(&self) -> &[TimelineRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw scores of `emotion`, aligned with segment index.
    pub fn series(&self, emotion: Emotion) -> Vec<f64> {
        self.rows.iter().map(|row| row.scores.get(emotion)).collect()
    }

    /// Scores of `emotion` smoothed with a centered window of size `window`.
    pub fn smoothed_series(&self, emotion: Emotion, window: usize) -> Vec<f64> {
        moving_average(&self.series(emotion), window)
    }

    /// Every emotion with its mean score, highest first.
    pub fn mean_scores(&self) -> Vec<EmotionMean> {
        mean_scores(self)
    }
}

/// Segment and score `text`.
///
/// Blank input is rejected with [`AnalysisError::EmptyInput`] before any
/// segmentation takes place.
pub fn analyze(
    text: &str,
    config: &AnalysisConfig,
    lexicon: &Lexicon,
) -> TimelineResult<AnalysisResult> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let segments = config.segmenter().segment(raw);
    tracing::debug!(
        method = ?config.method,
        segments = segments.len(),
        "segmented input"
    );
    Ok(AnalysisResult::from_segments(segments, lexicon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentMethod;

    #[test]
    fn test_rows_are_indexed_from_one() {
        let config = AnalysisConfig {
            method: SegmentMethod::Words,
            words_per_chunk: 10,
            ..AnalysisConfig::default()
        };
        let text = vec!["word"; 25].join(" ");
        let result = analyze(&text, &config, Lexicon::builtin()).unwrap();

        let indices: Vec<usize> = result.rows().iter().map(|r| r.segment.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(result.emotions(), &Emotion::ALL);
    }

    #[test]
    fn test_preview_is_truncated() {
        let text = "é".repeat(200);
        let segment = Segment::new(1, text.clone());
        assert_eq!(segment.preview.chars().count(), PREVIEW_CHARS);
        assert_eq!(segment.text, text);

        let short = Segment::new(2, "short".into());
        assert_eq!(short.preview, "short");

        // Decomposed e + combining acute: two chars per grapheme.
        let combining = Segment::new(3, "e\u{301}".repeat(200));
        assert_eq!(combining.preview.chars().count(), PREVIEW_CHARS);
        assert_eq!(combining.preview, "e\u{301}".repeat(70));

        let offset = Segment::new(4, format!("a{}", "e\u{301}".repeat(100)));
        assert_eq!(offset.preview.chars().count(), 139);
        assert!(offset.preview.ends_with("e\u{301}"));
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let config = AnalysisConfig::default();
        assert_eq!(
            analyze(" \n\t ", &config, Lexicon::builtin()),
            Err(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn test_series_follow_rows() {
        let config = AnalysisConfig {
            method: SegmentMethod::Words,
            words_per_chunk: 10,
            ..AnalysisConfig::default()
        };
        let text = "happy happy a b c d e f g h sad x y z q r s t u v";
        let result = analyze(text, &config, Lexicon::builtin()).unwrap();
        assert_eq!(result.series(Emotion::Joy), vec![0.2, 0.0]);
        assert_eq!(result.series(Emotion::Sadness), vec![0.0, 0.1]);
        assert_eq!(result.smoothed_series(Emotion::Joy, 3), vec![0.1, 0.1]);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let config = AnalysisConfig::default();
        let text = "I trust you. I fear the dark!\nWow, what a surprise.";
        let first = analyze(text, &config, Lexicon::builtin()).unwrap();
        let second = analyze(text, &config, Lexicon::builtin()).unwrap();
        assert_eq!(first, second);
    }
}
