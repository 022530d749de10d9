//! CSV export of the result table.
//!
//! The header row is `segment,text,<emotion>...` without quoting. Each data
//! row quotes every field, doubling embedded quotes. Rows are separated by
//! `\n` with no trailing newline.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

use crate::{AnalysisError, AnalysisResult, TimelineResult};

fn export_error(err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Export {
        message: err.to_string(),
    }
}

fn write_records<I, R>(records: I, style: QuoteStyle) -> TimelineResult<Vec<u8>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record).map_err(export_error)?;
    }
    writer.into_inner().map_err(export_error)
}

/// Render `result` as CSV text.
pub fn to_csv(result: &AnalysisResult) -> TimelineResult<String> {
    let header: Vec<String> = ["segment", "text"]
        .iter()
        .map(|h| h.to_string())
        .chain(result.emotions().iter().map(|e| e.label().to_string()))
        .collect();

    let rows = result.rows().iter().map(|row| {
        let mut fields = vec![row.segment.index.to_string(), row.segment.preview.clone()];
        fields.extend(
            result
                .emotions()
                .iter()
                .map(|&emotion| row.scores.get(emotion).to_string()),
        );
        fields
    });

    let mut bytes = write_records(std::iter::once(header), QuoteStyle::Necessary)?;
    bytes.extend(write_records(rows, QuoteStyle::Always)?);
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(export_error)
}

/// Write the CSV rendering of `result` to `out`.
pub fn write_csv<W: Write>(result: &AnalysisResult, mut out: W) -> TimelineResult<()> {
    let csv = to_csv(result)?;
    out.write_all(csv.as_bytes()).map_err(export_error)?;
    out.flush().map_err(export_error)
}
