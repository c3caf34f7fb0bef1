//! Options shared by every command that reads commit history.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

use crate::git::Backend;
use crate::pairing::{aggregate, collect_commits, PairStats, Team};
use crate::utils::Settings;
use crate::window::{HistoryWindow, DEFAULT_LOOKBACK_MONTHS};

/// Where history comes from and how it is narrowed.
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Repository to read (defaults to the current directory).
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,

    /// First day to include, as YYYY-MM-DD.
    #[arg(long, value_name = "DATE", conflicts_with = "months")]
    pub since: Option<String>,

    /// Months of history to include, counted back from today [default: 2].
    #[arg(long, value_name = "N")]
    pub months: Option<u32>,

    /// JSON or YAML list of developers to restrict the output to.
    #[arg(long, value_name = "FILE")]
    pub team: Option<PathBuf>,

    /// How to read the history.
    #[arg(long, value_enum, default_value_t = Backend::Git2)]
    pub backend: Backend,
}

impl HistoryArgs {
    /// Resolves the window: `--since`, then `--months`, then the environment
    /// and settings, then the built-in lookback.
    pub fn window(&self, settings: &Settings, today: NaiveDate) -> Result<HistoryWindow> {
        if let Some(since) = &self.since {
            return HistoryWindow::parse(since);
        }

        let months = match self.months {
            Some(months) => months,
            None => settings.months()?.unwrap_or(DEFAULT_LOOKBACK_MONTHS),
        };
        HistoryWindow::months_back(today, months)
    }

    /// Team file from the command line, then the environment and settings.
    pub fn team_file(&self, settings: &Settings) -> Option<PathBuf> {
        self.team.clone().or_else(|| settings.team())
    }

    /// Reads, parses and aggregates the history, applying the team filter.
    pub fn load_stats(&self, settings: &Settings) -> Result<(PairStats, HistoryWindow)> {
        let window = self.window(settings, Local::now().date_naive())?;
        self.load_stats_in(settings, window)
    }

    /// Like [`Self::load_stats`] with an explicit window.
    pub fn load_stats_in(
        &self,
        settings: &Settings,
        window: HistoryWindow,
    ) -> Result<(PairStats, HistoryWindow)> {
        tracing::debug!(
            repo = %self.repo.display(),
            backend = %self.backend,
            since = %window.since,
            "reading history"
        );

        let source = self
            .backend
            .open(&self.repo)
            .with_context(|| format!("Failed to open history at {}", self.repo.display()))?;
        let records = source
            .records(&window)
            .context("Failed to read commit history")?;

        let batch = collect_commits(records);
        if !batch.skipped.is_empty() {
            tracing::warn!(
                skipped = batch.skipped.len(),
                "Some commit records were malformed and ignored"
            );
        }

        let mut stats = aggregate(&batch.commits);

        if let Some(team_file) = self.team_file(settings) {
            let team = Team::load_from_file(&team_file)?;
            stats.restrict_to(&team);
            tracing::info!(
                team = team.len(),
                developers = stats.roster.len(),
                pairs = stats.table.len(),
                "applied team filter"
            );
        }

        Ok((stats, window))
    }
}
