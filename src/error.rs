//! Typed errors for record parsing and history retrieval.

use std::path::PathBuf;

use thiserror::Error;

/// A single raw commit record could not be turned into a commit.
///
/// These are recoverable: the offending record is skipped and the rest of
/// the history is still aggregated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record contained no lines at all.
    #[error("empty commit record")]
    Empty,

    /// The header did not contain both an author and a date field.
    #[error("malformed commit header (expected author|date|message): {header:?}")]
    MissingFields {
        /// The offending header line.
        header: String,
    },

    /// The author field was blank.
    #[error("commit header has an empty author: {header:?}")]
    EmptyAuthor {
        /// The offending header line.
        header: String,
    },

    /// The date field was not a `YYYY-MM-DD` calendar day.
    #[error("invalid commit date {date:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The date text as found in the header.
        date: String,
    },
}

/// The commit history could not be read at all.
///
/// These are fatal for a run; nothing is retried.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// The path is not a readable git repository.
    #[error("failed to open git repository at {path}")]
    OpenRepository {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying libgit2 error.
        #[source]
        source: git2::Error,
    },

    /// Walking the revision graph failed.
    #[error("failed to walk commit history")]
    Walk(#[from] git2::Error),

    /// The `git` executable could not be started.
    #[error("failed to run git")]
    Spawn(#[source] std::io::Error),

    /// Reading the output of `git log` failed midway.
    #[error("failed to read git log output")]
    Read(#[source] std::io::Error),

    /// `git log` exited unsuccessfully.
    #[error("git log exited with {status}: {stderr}")]
    GitFailed {
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}
