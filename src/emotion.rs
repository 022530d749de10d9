//! The closed set of emotion categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One label from the fixed emotion set.
///
/// Declaration order is significant: it is the column order of the result
/// table and the tie-break order when ranking emotions with equal means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Trust,
    Disgust,
    Love,
}

impl Emotion {
    /// Every category, in declaration order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Trust,
        Emotion::Disgust,
        Emotion::Love,
    ];

    /// Lowercase label used in CSV headers and serialized output.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
            Emotion::Disgust => "disgust",
            Emotion::Love => "love",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label names no known emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmotion(pub String);

impl fmt::Display for UnknownEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown emotion {:?}", self.0)
    }
}

impl std::error::Error for UnknownEmotion {}

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Emotion::ALL
            .iter()
            .copied()
            .find(|emotion| emotion.label() == lower)
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}
