//! Emotion timelines over segmented text.
//!
//! Raw text is split into ordered segments, each segment is scored against
//! a lexicon of emotion trigger words, and the resulting table feeds charts
//! (smoothed per-emotion series) and CSV export.
//!
//! ## Pipeline
//!
//! - [`tokenize`] - lowercase word tokens (ASCII letters and apostrophes)
//! - [`score_tokens`] - per-emotion intensity in `[0, 1]` for one segment
//! - [`Segmenter`] - sentence bundling or fixed word chunks
//! - [`moving_average`] - centered smoothing of a score series
//! - [`top_emotions`] - default display subset by mean score
//!
//! ## Example
//!
//! ```
//! use emotion_timeline::{analyze, top_emotions, AnalysisConfig, Emotion, Lexicon};
//!
//! let text = "I am so happy and grateful today. But yesterday I was scared and anxious.";
//! let result = analyze(text, &AnalysisConfig::default(), Lexicon::builtin()).unwrap();
//!
//! assert_eq!(result.len(), 1);
//! assert!(result.rows()[0].scores.get(Emotion::Joy) > 0.0);
//! assert_eq!(top_emotions(&result, 2), vec![Emotion::Joy, Emotion::Fear]);
//! ```

mod analysis;
mod config;
mod display;
mod emotion;
mod errors;
mod export;
mod lexicon;
mod rank;
mod score;
mod segment;
mod selection;
mod session;
mod smooth;
mod source;
mod tokenize;

pub use analysis::{analyze, AnalysisResult, Segment, TimelineRow, PREVIEW_CHARS};
pub use config::AnalysisConfig;
pub use display::TimelineDisplay;
pub use emotion::{Emotion, UnknownEmotion};
pub use errors::{AnalysisError, TimelineResult};
pub use export::{to_csv, write_csv};
pub use lexicon::Lexicon;
pub use rank::{mean_scores, top_emotions, EmotionMean};
pub use score::{score_tokens, ScoreVector, MIN_DENOMINATOR};
pub use segment::{
    split_sentences, SegmentMethod, Segmenter, MIN_SENTENCE_THRESHOLD, MIN_WORD_CHUNK,
};
pub use selection::DisplaySelection;
pub use session::{ChartData, ChartSeries, Timeline};
pub use smooth::moving_average;
pub use source::{read_text_file, TextSource};
pub use tokenize::tokenize;
