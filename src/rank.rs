//! Ranking emotions by mean score.
//!
//! Ties keep declaration order ([`Emotion::ALL`]), which makes the
//! ranking deterministic and nested: the top `k` is always a prefix of the
//! top `k + 1`.

use serde::Serialize;

use crate::{AnalysisResult, Emotion};

/// An emotion with its mean score across all segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionMean {
    pub emotion: Emotion,
    pub mean: f64,
}

/// Mean score of every emotion column, sorted from highest to lowest.
///
/// An empty result ranks nothing.
pub fn mean_scores(result: &AnalysisResult) -> Vec<EmotionMean> {
    if result.is_empty() {
        return Vec::new();
    }
    let count = result.len() as f64;
    let mut means: Vec<EmotionMean> = result
        .emotions()
        .iter()
        .map(|&emotion| {
            let total: f64 = result.rows().iter().map(|row| row.scores.get(emotion)).sum();
            EmotionMean {
                emotion,
                mean: total / count,
            }
        })
        .collect();
    // Stable sort: equal means stay in declaration order.
    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    means
}

/// The `k` emotions with the highest mean score. `k` is raised to at least 1.
pub fn top_emotions(result: &AnalysisResult, k: usize) -> Vec<Emotion> {
    mean_scores(result)
        .into_iter()
        .take(k.max(1))
        .map(|m| m.emotion)
        .collect()
}
