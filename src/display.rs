//! Fixed-width text rendering of a result table.

use std::fmt::{self, Write};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::AnalysisResult;

const SPACE_PADDING: usize = 2;

/// Renders the first rows of an [`AnalysisResult`] as an aligned table with
/// scores to three decimals.
///
/// ```text
/// segment  text          joy    fear
/// 1        happy day     0.125  0.000
/// ```
pub struct TimelineDisplay<'a> {
    result: &'a AnalysisResult,
    max_rows: usize,
    text_width: usize,
}

impl<'a> TimelineDisplay<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        TimelineDisplay {
            result,
            max_rows: 10,
            text_width: 40,
        }
    }

    /// Show at most `max_rows` rows.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Cut previews to `text_width` display columns.
    pub fn with_text_width(mut self, text_width: usize) -> Self {
        self.text_width = text_width.max(1);
        self
    }

    fn cells(&self) -> Vec<Vec<String>> {
        let mut header = vec!["segment".to_string(), "text".to_string()];
        header.extend(self.result.emotions().iter().map(|e| e.label().to_string()));

        let mut table = vec![header];
        for row in self.result.rows().iter().take(self.max_rows) {
            let mut cells = vec![
                row.segment.index.to_string(),
                truncate_to_width(&row.segment.preview, self.text_width),
            ];
            cells.extend(
                self.result
                    .emotions()
                    .iter()
                    .map(|&emotion| format!("{:.3}", row.scores.get(emotion))),
            );
            table.push(cells);
        }
        table
    }
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w + 1 > width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

impl<'a> fmt::Display for TimelineDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.cells();
        let columns = table[0].len();
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                table
                    .iter()
                    .map(|cells| UnicodeWidthStr::width(cells[col].as_str()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (i, cells) in table.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for (col, cell) in cells.iter().enumerate() {
                f.write_str(cell)?;
                // no trailing padding after the last column
                if col + 1 < columns {
                    let pad = widths[col] - UnicodeWidthStr::width(cell.as_str()) + SPACE_PADDING;
                    for _ in 0..pad {
                        f.write_char(' ')?;
                    }
                }
            }
        }

        let hidden = self.result.len().saturating_sub(self.max_rows);
        if hidden > 0 {
            write!(f, "\n… {} more segments", hidden)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Emotion, Lexicon};

    fn lexicon() -> Lexicon {
        Lexicon::from_entries(vec![
            (Emotion::Joy, vec!["happy"]),
            (Emotion::Fear, vec!["scared"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_display() {
        let result = AnalysisResult::from_segments(
            vec![
                "happy day".to_string(),
                "a long and scared walk home through the rain".to_string(),
                "quiet".to_string(),
            ],
            &lexicon(),
        );

        let display = TimelineDisplay::new(&result)
            .with_max_rows(2)
            .with_text_width(16);
        insta::assert_snapshot!(display, @r###"
        segment  text              joy    fear
        1        happy day         0.125  0.000
        2        a long and scar…  0.000  0.111
        … 1 more segments
        "###);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        // wide characters take two columns each
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }
}
