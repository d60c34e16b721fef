//! Store error types.
//!
//! The taxonomy callers rely on: `NotFound` (absent file or agent, often
//! recoverable), `MissingSection`/`Parse` (file present but unusable,
//! always surfaced with the offending piece named), and `Io`/`Persist`
//! (read or write failures; a failed write is guaranteed to have left the
//! prior file intact).

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the configuration and agent stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// A file or agent directory that the operation requires is absent.
    #[error("{0} not found")]
    NotFound(PathBuf),

    /// The document parsed but a required section is missing.
    #[error("Missing required section: {section}")]
    MissingSection { section: &'static str },

    /// The file exists but is not valid JSON of the expected shape.
    #[error("Invalid JSON in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// Failed to read a file that exists.
    #[error("Failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// Failed to complete a write; the previous file is untouched.
    #[error("Failed to write {path}: {reason}")]
    Persist { path: PathBuf, reason: String },
}

impl StoreError {
    /// True for the "absent, treat as empty state" cases.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
