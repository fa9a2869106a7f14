//! Error types for the results browser
//!
//! Everything in this enum is fatal to the run. Two recoverable conditions
//! deliberately never appear here: an invalid selection is handled by
//! re-prompting inside the session loop, and end-of-input at the prompt is an
//! ordinary `None` selection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Results-browser error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invoked without any result directories
    #[error("expected a list of directories")]
    Usage,

    /// A discovered file is not a valid result snapshot
    #[error("malformed result file {}: {reason}", .path.display())]
    MalformedInput {
        /// Path of the offending file
        path: PathBuf,
        /// What the parser or validator rejected
        reason: String,
    },

    /// IO error (directory scan, file read, display cleanup)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart backend failure while rendering a figure
    #[error("render error: {0}")]
    Render(String),
}

impl Error {
    /// Build a `MalformedInput` error for `path`.
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
