//! Commit attribution and pair-day aggregation.

pub mod aggregate;
pub mod commit;
pub mod pair;
pub mod team;

pub use aggregate::{aggregate, PairDayTable, PairDays, PairStats, Roster};
pub use commit::{Commit, Developers, RawRecord, RECORD_SENTINEL};
pub use pair::Pair;
pub use team::Team;

use crate::error::RecordError;

/// Commits parsed from a history, plus the records that had to be dropped.
#[derive(Debug, Default)]
pub struct CommitBatch {
    /// Successfully parsed commits.
    pub commits: Vec<Commit>,
    /// Malformed records, with the reason each was skipped.
    pub skipped: Vec<RecordError>,
}

/// Parses every record, skipping malformed ones so a single corrupt record
/// cannot abort the run.
pub fn collect_commits<I>(records: I) -> CommitBatch
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut batch = CommitBatch::default();

    for record in records {
        match Commit::parse(&record) {
            Ok(commit) => batch.commits.push(commit),
            Err(err) => {
                tracing::warn!("Skipping commit record: {err}");
                batch.skipped.push(err);
            }
        }
    }

    tracing::debug!(
        parsed = batch.commits.len(),
        skipped = batch.skipped.len(),
        "parsed commit records"
    );

    batch
}
