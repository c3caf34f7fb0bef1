//! Git repository operations

use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use git2::{Commit, ErrorCode, Repository, Sort, Time};

use crate::error::HistoryError;
use crate::git::HistorySource;
use crate::pairing::commit::DATE_FORMAT;
use crate::pairing::{RawRecord, RECORD_SENTINEL};
use crate::window::HistoryWindow;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open repository at specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|source| HistoryError::OpenRepository {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { repo })
    }

    /// Walk from HEAD and build a raw record for every commit in the window.
    ///
    /// Like `git log --since`, the window applies to the committer date while
    /// the record carries the author date.
    pub fn records_since(&self, window: &HistoryWindow) -> Result<Vec<RawRecord>, HistoryError> {
        match self.repo.head() {
            Ok(_) => {}
            // An unborn HEAD has no history to report.
            Err(err) if err.code() == ErrorCode::UnbornBranch => {
                tracing::info!("repository has no commits yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(HistoryError::Walk(err)),
        }

        let mut walker = self.repo.revwalk()?;
        walker.set_sorting(Sort::TIME)?;
        walker.push_head()?;

        let mut records = Vec::new();
        for oid in walker {
            let commit = self.repo.find_commit(oid?)?;
            if !window.contains(local_day(commit.committer().when())) {
                continue;
            }
            records.push(record_for(&commit));
        }

        tracing::info!(records = records.len(), since = %window.since, "walked repository history");
        Ok(records)
    }
}

impl HistorySource for GitRepository {
    fn records(&self, window: &HistoryWindow) -> Result<Vec<RawRecord>, HistoryError> {
        self.records_since(window)
    }
}

/// Format a commit the way `git log --pretty=format:%an|%ad|%B<sentinel> --date=short` does.
fn record_for(commit: &Commit) -> RawRecord {
    let author = commit.author();
    let name = String::from_utf8_lossy(author.name_bytes()).into_owned();
    let date = local_day(author.when()).format(DATE_FORMAT).to_string();
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

    let mut body = message.lines();
    let subject = body.next().unwrap_or("");

    let mut lines = vec![format!("{name}|{date}|{subject}")];
    lines.extend(body.map(str::to_string));
    lines.push(RECORD_SENTINEL.to_string());

    RawRecord { lines }
}

/// Calendar day of a git timestamp in the offset it was recorded with.
fn local_day(time: Time) -> NaiveDate {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(time.seconds(), 0)
        .unwrap_or_default()
        .with_timezone(&offset)
        .date_naive()
}
