//! Emotion timeline CLI.
//!
//! Reads a `.txt` file (or stdin), segments and scores it, and prints one of:
//!
//! - `table`: the first rows of the result table plus mean scores
//! - `csv`: the full CSV export
//! - `chart`: smoothed series for the displayed emotions, as JSON
//! - `means`: every emotion ranked by mean score

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use emotion_timeline::{
    read_text_file, AnalysisConfig, Emotion, Lexicon, SegmentMethod, TextSource, Timeline,
    TimelineDisplay,
};

/// Score text segments against an emotion lexicon and print the timeline.
#[derive(Parser, Debug)]
#[command(name = "emotion-timeline")]
#[command(version)]
struct Cli {
    /// Plain-text input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// TOML file with analysis options
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file with a custom lexicon
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Segmentation method
    #[arg(long, value_enum)]
    method: Option<Method>,

    /// Words per chunk (word mode) or bundling threshold (sentence mode)
    #[arg(long)]
    words_per_chunk: Option<usize>,

    /// Moving-average window for charted series
    #[arg(long)]
    smoothing: Option<usize>,

    /// Number of emotions to chart when none are chosen
    #[arg(long)]
    top_k: Option<usize>,

    /// Chart these emotions instead of the top-K (repeatable)
    #[arg(long = "emotion", short = 'e')]
    emotions: Vec<Emotion>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Rows shown by the table format
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    Sentences,
    Words,
}

impl From<Method> for SegmentMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Sentences => SegmentMethod::Sentences,
            Method::Words => SegmentMethod::Words,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Chart,
    Means,
}

impl Cli {
    fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };
        if let Some(method) = self.method {
            config.method = method.into();
        }
        if let Some(words) = self.words_per_chunk {
            config.words_per_chunk = words;
        }
        if let Some(window) = self.smoothing {
            config.smoothing_window = window;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        Ok(config)
    }

    fn lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => Lexicon::load(path)
                .with_context(|| format!("loading lexicon {}", path.display())),
            None => Ok(Lexicon::default()),
        }
    }

    fn source(&self) -> Result<TextSource> {
        match &self.input {
            Some(path) => Ok(read_text_file(path)?),
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("reading stdin")?;
                Ok(TextSource::Pasted(text))
            }
        }
    }
}

fn render(timeline: &Timeline, format: Format, rows: usize) -> Result<String> {
    let result = match timeline.result() {
        Some(result) => result,
        None => return Ok(String::new()),
    };

    let out = match format {
        Format::Csv => timeline
            .export_csv()
            .transpose()?
            .unwrap_or_default(),
        Format::Chart => serde_json::to_string_pretty(&timeline.chart())?,
        Format::Means => render_means(timeline),
        Format::Table => {
            let active: Vec<&str> = timeline
                .active_emotions()
                .iter()
                .map(|e| e.label())
                .collect();
            format!(
                "{}\n\n{}\n\ncharted: {}",
                TimelineDisplay::new(result).with_max_rows(rows),
                render_means(timeline),
                active.join(", ")
            )
        }
    };
    Ok(out)
}

fn render_means(timeline: &Timeline) -> String {
    let means = timeline
        .result()
        .map(|result| result.mean_scores())
        .unwrap_or_default();
    let mut out = String::from("mean scores:");
    for mean in means {
        out.push_str(&format!("\n  {:<8}  {:.4}", mean.emotion.label(), mean.mean));
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("emotion_timeline=info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let mut timeline = Timeline::new(cli.analysis_config()?, cli.lexicon()?);
    let result = timeline.analyze_source(cli.source()?)?;
    tracing::info!(segments = result.len(), "analysis complete");

    timeline.select(cli.emotions.iter().copied());

    let rendered = render(&timeline, cli.format, cli.rows)?;
    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline_for(text: &str) -> Timeline {
        let mut timeline = Timeline::new(AnalysisConfig::default(), Lexicon::default());
        timeline.analyze(text).unwrap();
        timeline
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "emotion-timeline",
            "--method",
            "words",
            "--words-per-chunk",
            "25",
            "--top-k",
            "3",
            "-e",
            "joy",
            "-e",
            "fear",
        ]);
        let config = cli.analysis_config().unwrap();
        assert_eq!(config.method, SegmentMethod::Words);
        assert_eq!(config.words_per_chunk, 25);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.smoothing_window, 3);
        assert_eq!(cli.emotions, vec![Emotion::Joy, Emotion::Fear]);
        assert_eq!(cli.format, Format::Table);
    }

    #[test]
    fn test_rejects_unknown_emotion() {
        assert!(Cli::try_parse_from(["emotion-timeline", "-e", "envy"]).is_err());
    }

    #[test]
    fn test_means_output() {
        let timeline = timeline_for("I hate this, I am so angry and sad.");
        insta::assert_snapshot!(render(&timeline, Format::Means, 10).unwrap(), @r###"
        mean scores:
          anger     0.2222
          sadness   0.1111
          joy       0.0000
          fear      0.0000
          surprise  0.0000
          trust     0.0000
          disgust   0.0000
          love      0.0000
        "###);
    }

    #[test]
    fn test_csv_output_matches_export() {
        let timeline = timeline_for("Wow. What a surprise!");
        let csv = render(&timeline, Format::Csv, 10).unwrap();
        assert_eq!(csv, timeline.export_csv().unwrap().unwrap());
    }

    #[test]
    fn test_chart_output_is_json() {
        let mut timeline = timeline_for("I trust you and feel safe.");
        timeline.toggle(Emotion::Trust);
        let json = render(&timeline, Format::Chart, 10).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["labels"], serde_json::json!([1]));
        assert_eq!(value["datasets"][0]["emotion"], "trust");
        assert_eq!(value["datasets"][0]["values"][0], 0.25);
    }
}
