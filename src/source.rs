//! Input acquisition.
//!
//! Text reaches the pipeline either pasted directly or uploaded as a file.
//! Uploads must be plain `.txt` files; anything else is rejected before its
//! contents are decoded.

use std::fs;
use std::path::Path;

use crate::{AnalysisError, TimelineResult};

/// Where a piece of input text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Pasted(String),
    File { name: String, bytes: Vec<u8> },
}

impl TextSource {
    /// Extract the text.
    ///
    /// Files need a `.txt` extension (any case). Invalid UTF-8 sequences are
    /// replaced rather than rejected.
    pub fn into_text(self) -> TimelineResult<String> {
        match self {
            TextSource::Pasted(text) => Ok(text),
            TextSource::File { name, bytes } => {
                if !is_plain_text_name(&name) {
                    return Err(AnalysisError::InvalidFileType { name });
                }
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

fn is_plain_text_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".txt")
}

/// Read `path` into a [`TextSource::File`].
///
/// The extension is checked before the file is opened.
pub fn read_text_file(path: &Path) -> TimelineResult<TextSource> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if !is_plain_text_name(&name) {
        return Err(AnalysisError::InvalidFileType { name });
    }
    let bytes = fs::read(path).map_err(|e| AnalysisError::io(path.display(), e))?;
    Ok(TextSource::File { name, bytes })
}
