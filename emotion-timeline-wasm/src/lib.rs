use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use emotion_timeline::{
    AnalysisConfig, AnalysisError, ChartData, Emotion, EmotionMean, Lexicon, ScoreVector,
    SegmentMethod, Timeline,
};

// Set up panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Options accepted from JavaScript. Missing fields take the library defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WasmOptions {
    pub method: Option<SegmentMethod>,
    pub words_per_chunk: Option<i64>,
    pub smoothing_window: Option<i64>,
    pub top_k: Option<i64>,
    /// Emotions toggled on by the user; empty means top-K.
    pub selected: Vec<Emotion>,
}

/// Negative numbers from JS become 0; [`Timeline::new`] then raises them to
/// their floors.
fn non_negative(value: Option<i64>, default: usize) -> usize {
    value.map_or(default, |v| usize::try_from(v).unwrap_or(0))
}

impl WasmOptions {
    fn config(&self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        AnalysisConfig {
            method: self.method.unwrap_or(defaults.method),
            words_per_chunk: non_negative(self.words_per_chunk, defaults.words_per_chunk),
            smoothing_window: non_negative(self.smoothing_window, defaults.smoothing_window),
            top_k: non_negative(self.top_k, defaults.top_k),
        }
    }
}

/// One table row, flattened the way the chart front end reads it:
/// `{ segment, text, joy, anger, ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct WasmRow {
    pub segment: usize,
    pub text: String,
    #[serde(flatten)]
    pub scores: ScoreVector,
}

#[derive(Debug, Clone, Serialize)]
pub struct WasmAnalysis {
    pub emotions: Vec<Emotion>,
    pub rows: Vec<WasmRow>,
    pub means: Vec<EmotionMean>,
    /// Emotions drawn on the chart.
    pub active: Vec<Emotion>,
    pub chart: Option<ChartData>,
}

fn to_js_error(err: AnalysisError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_options(options: JsValue) -> Result<WasmOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(WasmOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn run_timeline(text: &str, options: &WasmOptions) -> Result<Timeline, AnalysisError> {
    let mut timeline = Timeline::new(options.config(), Lexicon::default());
    timeline.analyze(text)?;
    timeline.select(options.selected.iter().copied());
    Ok(timeline)
}

fn analyze_text_internal(text: &str, options: &WasmOptions) -> Result<WasmAnalysis, AnalysisError> {
    let timeline = run_timeline(text, options)?;
    let result = timeline.result().ok_or(AnalysisError::EmptyInput)?;

    let rows = result
        .rows()
        .iter()
        .map(|row| WasmRow {
            segment: row.segment.index,
            text: row.segment.preview.clone(),
            scores: row.scores.clone(),
        })
        .collect();

    Ok(WasmAnalysis {
        emotions: result.emotions().to_vec(),
        rows,
        means: result.mean_scores(),
        active: timeline.active_emotions(),
        chart: timeline.chart(),
    })
}

fn export_csv_internal(text: &str, options: &WasmOptions) -> Result<String, AnalysisError> {
    let timeline = run_timeline(text, options)?;
    timeline.export_csv().unwrap_or(Err(AnalysisError::EmptyInput))
}

/// Analyze `text` and return the table, mean scores and chart series.
///
/// Rejects blank text with the user-facing message.
#[wasm_bindgen]
pub fn analyze_text(text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = parse_options(options)?;
    let analysis = analyze_text_internal(text, &options).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&analysis).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Analyze `text` and return the CSV export.
#[wasm_bindgen]
pub fn export_csv(text: &str, options: JsValue) -> Result<String, JsValue> {
    let options = parse_options(options)?;
    export_csv_internal(text, &options).map_err(to_js_error)
}

/// Labels of the built-in emotions, in column order.
#[wasm_bindgen]
pub fn emotion_labels() -> Vec<JsValue> {
    Lexicon::builtin()
        .emotions()
        .map(|e| JsValue::from_str(e.label()))
        .collect()
}
