//! Error types for the timeline pipeline.
//!
//! Every variant is a recoverable validation failure. Errors are raised
//! before any held [`AnalysisResult`](crate::AnalysisResult) is replaced, so
//! callers can keep showing the previous result alongside the message.

use thiserror::Error;

/// Errors that can occur while acquiring, configuring or analyzing text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input was empty or whitespace only.
    #[error("Please paste text or upload a .txt file.")]
    EmptyInput,

    /// An uploaded file was not plain text.
    #[error("Please upload a .txt file. ({name} was rejected)")]
    InvalidFileType { name: String },

    /// Reading a file from disk failed.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// A lexicon definition violated its invariants.
    #[error("invalid lexicon: {message}")]
    Lexicon { message: String },

    /// Serializing the result table failed.
    #[error("export failed: {message}")]
    Export { message: String },
}

impl AnalysisError {
    pub(crate) fn io(path: impl std::fmt::Display, err: std::io::Error) -> Self {
        AnalysisError::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn lexicon(message: impl Into<String>) -> Self {
        AnalysisError::Lexicon {
            message: message.into(),
        }
    }
}

/// Result type for timeline operations.
pub type TimelineResult<T> = Result<T, AnalysisError>;
