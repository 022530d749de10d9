//! Lexical emotion scoring for a single segment.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{Emotion, Lexicon};

/// Denominator floor, so a segment with one or two words cannot score
/// near 1 from a single match.
pub const MIN_DENOMINATOR: usize = 8;

/// Per-emotion intensity for one segment. Every active emotion is present
/// and every value lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreVector {
    scores: BTreeMap<Emotion, f64>,
}

impl ScoreVector {
    /// Score of `emotion`, or 0 if it is not part of the active set.
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.scores.get(&emotion).copied().unwrap_or(0.0)
    }

    /// `(emotion, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        self.scores.iter().map(|(emotion, score)| (*emotion, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Score a segment's tokens against `lexicon`.
///
/// Each matching token counts once for every emotion whose list contains it.
/// The count is divided by `max(8, tokens.len())` and capped at 1.
pub fn score_tokens<S: AsRef<str>>(tokens: &[S], lexicon: &Lexicon) -> ScoreVector {
    let mut counts: BTreeMap<Emotion, usize> = lexicon.emotions().map(|e| (e, 0)).collect();
    for token in tokens {
        let token = token.as_ref();
        for (emotion, count) in counts.iter_mut() {
            if lexicon.matches(*emotion, token) {
                *count += 1;
            }
        }
    }

    let denominator = tokens.len().max(MIN_DENOMINATOR) as f64;
    let scores = counts
        .into_iter()
        .map(|(emotion, count)| (emotion, (count as f64 / denominator).min(1.0)))
        .collect();
    ScoreVector { scores }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn score(text: &str) -> ScoreVector {
        score_tokens(&tokenize(text), Lexicon::builtin())
    }

    #[test]
    fn test_short_segment_uses_denominator_floor() {
        let scores = score("happy happy");
        assert_eq!(scores.get(Emotion::Joy), 2.0 / 8.0);
        assert_eq!(scores.get(Emotion::Anger), 0.0);
    }

    #[test]
    fn test_long_segment_divides_by_token_count() {
        // 10 tokens, one fear match
        let scores = score("one two three four five six seven eight nine scared");
        assert_eq!(scores.get(Emotion::Fear), 0.1);
    }

    #[test]
    fn test_shared_word_counts_for_each_category() {
        let scores = score("love");
        assert_eq!(scores.get(Emotion::Joy), 0.125);
        assert_eq!(scores.get(Emotion::Love), 0.125);
    }

    #[test]
    fn test_empty_segment_scores_all_zero() {
        let scores = score("");
        assert_eq!(scores.len(), Emotion::ALL.len());
        assert!(scores.iter().all(|(_, s)| s == 0.0));
    }

    #[test]
    fn test_score_is_capped_at_one() {
        let lexicon = Lexicon::from_entries(vec![
            (Emotion::Joy, vec!["yay"]),
            (Emotion::Love, vec!["yay"]),
        ])
        .unwrap();
        let tokens = vec!["yay"; 20];
        let scores = score_tokens(&tokens, &lexicon);
        assert_eq!(scores.get(Emotion::Joy), 1.0);
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(
            score("happy but scared and sad"),
            score("sad and scared but happy")
        );
    }
}
