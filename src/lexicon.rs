//! Emotion trigger-word lexicons.
//!
//! A [`Lexicon`] maps each active [`Emotion`] to a non-empty set of lowercase
//! trigger words. The built-in lexicon is constructed once and borrowed;
//! custom lexicons are loaded from TOML:
//!
//! ```toml
//! [[emotion]]
//! name = "joy"
//! words = ["happy", "glad"]
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::{AnalysisError, Emotion, TimelineResult};

const JOY: &[&str] = &[
    "happy", "joy", "glad", "delight", "smile", "cheer", "love", "grateful", "bliss",
];
const ANGER: &[&str] = &["angry", "furious", "rage", "mad", "annoyed", "betrayed", "hate"];
const SADNESS: &[&str] = &["sad", "down", "cry", "tears", "hurt", "lonely", "grief", "broken"];
const FEAR: &[&str] = &["afraid", "scared", "fear", "terrified", "anxious", "worry", "panic"];
const SURPRISE: &[&str] = &["surprised", "shocked", "astonished", "unexpected", "sudden", "wow"];
const TRUST: &[&str] = &["trust", "faith", "rely", "depend", "secure", "safe", "confident"];
const DISGUST: &[&str] = &["disgust", "gross", "nausea", "repulse", "revolt", "vile"];
const LOVE: &[&str] = &["love", "adore", "dear", "beloved", "fond", "cherish", "sweetheart"];

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    let words = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<BTreeSet<_>>();
    let entries = [
        (Emotion::Joy, JOY),
        (Emotion::Anger, ANGER),
        (Emotion::Sadness, SADNESS),
        (Emotion::Fear, FEAR),
        (Emotion::Surprise, SURPRISE),
        (Emotion::Trust, TRUST),
        (Emotion::Disgust, DISGUST),
        (Emotion::Love, LOVE),
    ]
    .into_iter()
    .map(|(emotion, list)| (emotion, words(list)))
    .collect();
    Lexicon { entries }
});

/// Mapping from emotion to its trigger words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: BTreeMap<Emotion, BTreeSet<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default)]
    emotion: Vec<LexiconEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconEntry {
    name: Emotion,
    words: Vec<String>,
}

impl Lexicon {
    /// The built-in eight-category lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Build a lexicon from `(emotion, words)` pairs.
    ///
    /// Words are trimmed, lowercased and de-duplicated. An emotion listed
    /// twice, an empty definition, or an emotion left without words is an
    /// error.
    pub fn from_entries<I, W, S>(entries: I) -> TimelineResult<Self>
    where
        I: IntoIterator<Item = (Emotion, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (emotion, words) in entries {
            let words: BTreeSet<String> = words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
            if words.is_empty() {
                return Err(AnalysisError::lexicon(format!(
                    "emotion {} has no trigger words",
                    emotion
                )));
            }
            if map.insert(emotion, words).is_some() {
                return Err(AnalysisError::lexicon(format!(
                    "emotion {} is defined more than once",
                    emotion
                )));
            }
        }
        if map.is_empty() {
            return Err(AnalysisError::lexicon("no emotions defined"));
        }
        Ok(Lexicon { entries: map })
    }

    /// Parse a lexicon from TOML source.
    pub fn from_toml_str(source: &str) -> TimelineResult<Self> {
        let file: LexiconFile =
            toml::from_str(source).map_err(|e| AnalysisError::lexicon(e.to_string()))?;
        let lexicon = Self::from_entries(file.emotion.into_iter().map(|e| (e.name, e.words)))?;
        tracing::debug!(emotions = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Load a lexicon from a TOML file.
    pub fn load(path: &Path) -> TimelineResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::io(path.display(), e))?;
        Self::from_toml_str(&content)
    }

    /// Active emotions, in declaration order.
    pub fn emotions(&self) -> impl Iterator<Item = Emotion> + '_ {
        self.entries.keys().copied()
    }

    /// Trigger words for `emotion`, if it is active.
    pub fn words(&self, emotion: Emotion) -> Option<&BTreeSet<String>> {
        self.entries.get(&emotion)
    }

    /// Whether `token` triggers `emotion`.
    pub fn matches(&self, emotion: Emotion, token: &str) -> bool {
        self.entries
            .get(&emotion)
            .map_or(false, |words| words.contains(token))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
