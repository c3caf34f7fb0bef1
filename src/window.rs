//! The lookback window a history query is bounded by.

use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::pairing::commit::DATE_FORMAT;

/// Default lookback when neither a date nor a month count is given.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 2;

/// Only commits on or after `since` are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryWindow {
    /// First calendar day included.
    pub since: NaiveDate,
}

impl HistoryWindow {
    /// Window starting on a fixed day.
    pub fn since(since: NaiveDate) -> Self {
        Self { since }
    }

    /// Window starting `months` calendar months before `today`.
    ///
    /// Month ends clamp, so 2025-05-31 minus three months is 2025-02-28.
    pub fn months_back(today: NaiveDate, months: u32) -> Result<Self> {
        let since = today
            .checked_sub_months(Months::new(months))
            .with_context(|| format!("Cannot go back {months} months from {today}"))?;
        Ok(Self { since })
    }

    /// Parses a `YYYY-MM-DD` start day.
    pub fn parse(since: &str) -> Result<Self> {
        let since = NaiveDate::parse_from_str(since.trim(), DATE_FORMAT)
            .with_context(|| format!("Invalid date '{since}', expected YYYY-MM-DD"))?;
        Ok(Self { since })
    }

    /// The start day as `git log --since` expects it.
    pub fn since_arg(&self) -> String {
        self.since.format(DATE_FORMAT).to_string()
    }

    /// Whether `day` falls inside the window.
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.since
    }
}
