//! Structured error types for tweetdash
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the tweet dataset.
///
/// All variants are fatal for a session: no view can render without data.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    #[error("Missing required column '{column}' in {}", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

impl DatasetError {
    /// True for errors caused by file content rather than file access.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::MissingColumn { .. })
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err =
            DatasetError::MissingColumn { path: PathBuf::from("Tweets.csv"), column: "text" };
        assert_eq!(err.to_string(), "Missing required column 'text' in Tweets.csv");
        assert!(err.is_format_error());
    }

    #[test]
    fn test_file_access_error() {
        let err = DatasetError::FileAccess {
            path: PathBuf::from("/nope/Tweets.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/nope/Tweets.csv"));
        assert!(!err.is_format_error());
    }
}
