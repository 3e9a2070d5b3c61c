//! File-source construction errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when opening (or reopening) a file-backed question
/// source. These are fatal to the caller: unlike a malformed block, a
/// missing or unusable file is never skipped.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The path was empty or whitespace-only: a caller bug, not a
    /// property of the file system.
    #[error("question file path cannot be empty or whitespace")]
    BlankPath,

    /// The path does not resolve to an existing file.
    #[error("unable to find question file {path:?}")]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened.
    #[error("failed to open question file: {0}")]
    Io(#[from] std::io::Error),
}
