//! Analysis session state.
//!
//! A [`Timeline`] holds the configuration, the lexicon, the latest
//! [`AnalysisResult`] and the display selection. A new analysis replaces the
//! result wholesale, and only after it succeeds: a failed call leaves the
//! previous result and selection in place.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::{
    analyze, to_csv, AnalysisConfig, AnalysisResult, DisplaySelection, Emotion, Lexicon,
    TextSource, TimelineResult,
};

/// One smoothed line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub emotion: Emotion,
    /// Smoothed scores, aligned with [`ChartData::labels`].
    pub values: Vec<f64>,
}

/// Chart-ready series: x is the segment index, y a smoothed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<usize>,
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    /// Smooth each of `emotions` in `result` with `window`.
    pub fn build(result: &AnalysisResult, emotions: &[Emotion], window: usize) -> Self {
        ChartData {
            labels: result.rows().iter().map(|row| row.segment.index).collect(),
            datasets: emotions
                .iter()
                .map(|&emotion| ChartSeries {
                    emotion,
                    values: result.smoothed_series(emotion, window),
                })
                .collect(),
        }
    }
}

/// Interactive state around repeated analysis runs.
#[derive(Debug, Clone)]
pub struct Timeline {
    config: AnalysisConfig,
    lexicon: Lexicon,
    result: Option<AnalysisResult>,
    selection: DisplaySelection,
}

impl Timeline {
    pub fn new(config: AnalysisConfig, lexicon: Lexicon) -> Self {
        let config = config.clamped(lexicon.len());
        let selection = DisplaySelection::Default {
            top_k: config.top_k,
        };
        Timeline {
            config,
            lexicon,
            result: None,
            selection,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn selection(&self) -> &DisplaySelection {
        &self.selection
    }

    /// Replace the configuration. The current result is kept; smoothing
    /// and the default top-K apply on the next resolve.
    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config.clamped(self.lexicon.len());
        if let DisplaySelection::Default { top_k } = &mut self.selection {
            *top_k = self.config.top_k;
        }
    }

    /// Analyze `text`, replacing the current result on success.
    pub fn analyze(&mut self, text: &str) -> TimelineResult<&AnalysisResult> {
        let result = analyze(text, &self.config, &self.lexicon)?;
        tracing::debug!(segments = result.len(), "replaced analysis result");
        self.selection = DisplaySelection::Default {
            top_k: self.config.top_k,
        };
        Ok(self.result.insert(result))
    }

    /// Extract text from `source` and analyze it.
    pub fn analyze_source(&mut self, source: TextSource) -> TimelineResult<&AnalysisResult> {
        let text = source.into_text()?;
        self.analyze(&text)
    }

    /// Drop the result and any explicit selection.
    pub fn reset(&mut self) {
        self.result = None;
        self.selection = DisplaySelection::Default {
            top_k: self.config.top_k,
        };
    }

    /// Toggle `emotion` in the explicit selection.
    pub fn toggle(&mut self, emotion: Emotion) {
        self.selection.toggle(emotion, self.config.top_k);
    }

    /// Replace the selection with `emotions`. Repeats collapse; an empty
    /// list restores the default top-K.
    pub fn select<I>(&mut self, emotions: I)
    where
        I: IntoIterator<Item = Emotion>,
    {
        let chosen: BTreeSet<Emotion> = emotions.into_iter().collect();
        self.selection = if chosen.is_empty() {
            DisplaySelection::Default {
                top_k: self.config.top_k,
            }
        } else {
            DisplaySelection::Explicit(chosen)
        };
    }

    /// Emotions currently charted. Empty when there is no result.
    pub fn active_emotions(&self) -> Vec<Emotion> {
        match &self.result {
            Some(result) => self.selection.resolve(result),
            None => Vec::new(),
        }
    }

    /// Smoothed series for the active emotions.
    pub fn chart(&self) -> Option<ChartData> {
        let result = self.result.as_ref()?;
        let emotions = self.selection.resolve(result);
        Some(ChartData::build(
            result,
            &emotions,
            self.config.effective_window(),
        ))
    }

    /// CSV of the current result, if any.
    pub fn export_csv(&self) -> Option<TimelineResult<String>> {
        self.result.as_ref().map(to_csv)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Timeline::new(AnalysisConfig::default(), Lexicon::default())
    }
}
