//! Reading commit history into raw records.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

use crate::error::HistoryError;
use crate::pairing::RawRecord;
use crate::window::HistoryWindow;

pub mod cli_log;
pub mod records;
pub mod repository;

pub use cli_log::GitCliSource;
pub use records::RecordReader;
pub use repository::GitRepository;

/// Anything that can produce the raw commit records inside a window.
pub trait HistorySource {
    /// Returns every record in `window`; failure aborts the run.
    fn records(&self, window: &HistoryWindow) -> Result<Vec<RawRecord>, HistoryError>;
}

/// How history is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Walk the repository in-process with libgit2.
    #[default]
    Git2,
    /// Shell out to `git log`.
    GitCli,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git2 => write!(f, "git2"),
            Self::GitCli => write!(f, "git-cli"),
        }
    }
}

impl Backend {
    /// Opens a history source for the repository at `repo`.
    pub fn open(self, repo: &Path) -> Result<Box<dyn HistorySource>, HistoryError> {
        match self {
            Self::Git2 => Ok(Box::new(GitRepository::open_at(repo)?)),
            Self::GitCli => Ok(Box::new(GitCliSource::new(repo))),
        }
    }
}
