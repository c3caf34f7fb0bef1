//! Commit records and developer attribution.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Marker appended after each commit body in the `git log` format string.
pub const RECORD_SENTINEL: &str = "END_OF_COMMIT";

/// Trailer label naming an additional contributor in a commit message.
pub const CO_AUTHOR_LABEL: &str = "Co-authored-by:";

/// Date format used for commit days (`git log --date=short`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Distinct developer identities attributed to one commit.
pub type Developers = BTreeSet<String>;

/// One commit as emitted by the history query, before parsing.
///
/// The first line is the `author|date|subject` header; the remaining lines
/// are the rest of the message. A trailing [`RECORD_SENTINEL`] may still be
/// attached to the last line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Lines of the record, header first.
    pub lines: Vec<String>,
}

impl RawRecord {
    /// Creates a record from its lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// A commit reduced to the day it happened and the people behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Calendar day of the commit.
    pub date: NaiveDate,
    /// Author plus every co-author, deduplicated.
    pub developers: Developers,
}

impl Commit {
    /// Creates a commit from a date and a list of developer names.
    pub fn new<I, S>(date: NaiveDate, developers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date,
            developers: developers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a raw `git log` record.
    ///
    /// The header is split on the first two `|` only, so the subject may
    /// itself contain `|`. Co-authors are read from the subject and every
    /// following line.
    pub fn parse(record: &RawRecord) -> Result<Self, RecordError> {
        let mut lines = record.lines.iter().map(|line| strip_sentinel(line));
        let header = lines.next().ok_or(RecordError::Empty)?;

        let mut fields = header.splitn(3, '|');
        let (Some(author), Some(date)) = (fields.next(), fields.next()) else {
            return Err(RecordError::MissingFields {
                header: header.to_string(),
            });
        };
        let subject = fields.next();

        let author = author.trim();
        if author.is_empty() {
            return Err(RecordError::EmptyAuthor {
                header: header.to_string(),
            });
        }

        let date_text = date.trim();
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
            RecordError::InvalidDate {
                date: date_text.to_string(),
            }
        })?;

        let mut developers = Developers::new();
        developers.insert(author.to_string());
        developers.extend(subject.into_iter().chain(lines).filter_map(co_author));

        Ok(Self { date, developers })
    }

    /// Returns true when at least two developers share this commit.
    pub fn is_paired(&self) -> bool {
        self.developers.len() > 1
    }
}

/// Extracts the identity from a `Co-authored-by:` trailer line.
///
/// The identity is everything after the label up to the first `<`, or the
/// whole remainder when there is no e-mail part.
pub fn co_author(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(CO_AUTHOR_LABEL)?;
    let name = rest.split('<').next().unwrap_or(rest).trim();

    (!name.is_empty()).then(|| name.to_string())
}

fn strip_sentinel(line: &str) -> &str {
    line.strip_suffix(RECORD_SENTINEL).unwrap_or(line)
}
