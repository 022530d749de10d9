//! Which emotions to chart.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::rank::top_emotions;
use crate::{AnalysisResult, Emotion};

/// The emotions chosen for display.
///
/// An explicit choice always wins. Without one, the top-K emotions by mean
/// score are used; they are recomputed on every [`resolve`](Self::resolve)
/// so a new result or a new K is reflected immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySelection {
    Explicit(BTreeSet<Emotion>),
    Default { top_k: usize },
}

impl DisplaySelection {
    /// Flip `emotion` in the explicit set.
    ///
    /// Toggling from a default selection starts a new explicit set. Removing
    /// the last explicit emotion falls back to the default with `top_k`.
    pub fn toggle(&mut self, emotion: Emotion, top_k: usize) {
        let mut chosen = match self {
            DisplaySelection::Explicit(set) => std::mem::take(set),
            DisplaySelection::Default { .. } => BTreeSet::new(),
        };
        if !chosen.remove(&emotion) {
            chosen.insert(emotion);
        }
        *self = if chosen.is_empty() {
            DisplaySelection::Default { top_k }
        } else {
            DisplaySelection::Explicit(chosen)
        };
    }

    /// Concrete emotions to display for `result`, in declaration order for
    /// explicit choices and rank order for defaults.
    pub fn resolve(&self, result: &AnalysisResult) -> Vec<Emotion> {
        match self {
            DisplaySelection::Explicit(set) => set.iter().copied().collect(),
            DisplaySelection::Default { top_k } => top_emotions(result, *top_k),
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, DisplaySelection::Explicit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;

    fn sample() -> AnalysisResult {
        AnalysisResult::from_segments(
            vec!["sad and scared".to_string(), "sad again".to_string()],
            Lexicon::builtin(),
        )
    }

    #[test]
    fn test_default_resolves_to_top_k() {
        let selection = DisplaySelection::Default { top_k: 2 };
        assert_eq!(selection.resolve(&sample()), vec![Emotion::Sadness, Emotion::Fear]);
    }

    #[test]
    fn test_toggle_switches_to_explicit_and_back() {
        let mut selection = DisplaySelection::Default { top_k: 2 };
        selection.toggle(Emotion::Love, 2);
        selection.toggle(Emotion::Joy, 2);
        assert!(selection.is_explicit());
        assert_eq!(selection.resolve(&sample()), vec![Emotion::Joy, Emotion::Love]);

        selection.toggle(Emotion::Love, 2);
        selection.toggle(Emotion::Joy, 2);
        assert_eq!(selection, DisplaySelection::Default { top_k: 2 });
    }
}
