//! Analysis configuration.
//!
//! All numeric options are tuning knobs: values outside their documented
//! range are raised to the nearest valid bound instead of being rejected.
//!
//! ```toml
//! method = "words"
//! words_per_chunk = 40
//! smoothing_window = 5
//! top_k = 3
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::segment::{MIN_SENTENCE_THRESHOLD, MIN_WORD_CHUNK};
use crate::{AnalysisError, SegmentMethod, Segmenter, TimelineResult};

/// Options recognized by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub method: SegmentMethod,
    /// Chunk size in word mode, bundling threshold in sentence mode.
    #[serde(deserialize_with = "saturating_usize")]
    pub words_per_chunk: usize,
    /// Moving-average window applied to charted series.
    #[serde(deserialize_with = "saturating_usize")]
    pub smoothing_window: usize,
    /// Number of emotions shown when nothing is selected explicitly.
    #[serde(deserialize_with = "saturating_usize")]
    pub top_k: usize,
}

/// Read any integer, mapping negatives to 0 so [`AnalysisConfig::clamped`]
/// can raise them to their floor.
fn saturating_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(usize::try_from(value).unwrap_or(0))
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            method: SegmentMethod::Sentences,
            words_per_chunk: 60,
            smoothing_window: 3,
            top_k: 5,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from TOML source. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> TimelineResult<Self> {
        toml::from_str(source).map_err(|e| AnalysisError::Config {
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> TimelineResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::io(path.display(), e))?;
        Self::from_toml_str(&content)
    }

    /// The segmenter described by this configuration.
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new(self.method, self.words_per_chunk)
    }

    /// Smoothing window, at least 1.
    pub fn effective_window(&self) -> usize {
        self.smoothing_window.max(1)
    }

    /// Top-K, between 1 and `emotion_count`.
    pub fn effective_top_k(&self, emotion_count: usize) -> usize {
        self.top_k.max(1).min(emotion_count.max(1))
    }

    /// A copy with every value raised or lowered into its valid range.
    ///
    /// `emotion_count` bounds `top_k` from above.
    pub fn clamped(&self, emotion_count: usize) -> Self {
        let floor = match self.method {
            SegmentMethod::Sentences => MIN_SENTENCE_THRESHOLD,
            SegmentMethod::Words => MIN_WORD_CHUNK,
        };
        let clamped = AnalysisConfig {
            method: self.method,
            words_per_chunk: self.words_per_chunk.max(floor),
            smoothing_window: self.effective_window(),
            top_k: self.effective_top_k(emotion_count),
        };
        if clamped != *self {
            tracing::warn!(
                from = ?self,
                to = ?clamped,
                "configuration values clamped to valid range"
            );
        }
        clamped
    }
}
