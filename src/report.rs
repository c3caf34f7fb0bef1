//! Rendering pair-day statistics for people and tools.

use std::fmt;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::pairing::{PairDayTable, PairDays, PairStats};

pub mod csv;
pub mod html;

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Standalone HTML page with a developer matrix.
    #[default]
    Html,
    /// JSON document with the roster and pair list.
    Json,
    /// CSV developer matrix.
    Csv,
    /// YAML document with the roster and pair list.
    Yaml,
}

impl ReportFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Square, symmetric view of a pair table over a list of developers.
pub struct PairMatrix<'a> {
    developers: &'a [String],
    table: &'a PairDayTable,
}

impl<'a> PairMatrix<'a> {
    /// Builds a matrix over `developers`, in the given order.
    pub fn new(developers: &'a [String], table: &'a PairDayTable) -> Self {
        Self { developers, table }
    }

    /// Row and column labels.
    pub fn developers(&self) -> &'a [String] {
        self.developers
    }

    /// Days `row` and `col` worked together; `None` on the diagonal.
    pub fn cell(&self, row: &str, col: &str) -> Option<u32> {
        (row != col).then(|| self.table.get(row, col))
    }
}

/// Serializable report body shared by the JSON and YAML formats.
#[derive(Debug, Serialize)]
pub struct PairReport<'a> {
    /// First day of the window the history was read from.
    pub since: NaiveDate,
    /// Every developer in the report, sorted.
    pub developers: &'a [String],
    /// Pairs with their day counts.
    pub pairs: Vec<PairDays>,
}

/// Renders `stats` for the window starting at `since`.
pub fn render(stats: &PairStats, since: NaiveDate, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Html => {
            let title = format!("Pair Programming Days (since {since})");
            Ok(html::render(
                &PairMatrix::new(&stats.roster, &stats.table),
                &title,
            ))
        }
        ReportFormat::Csv => Ok(csv::render(&PairMatrix::new(&stats.roster, &stats.table))),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report_body(stats, since))
                .context("Failed to serialize report to JSON")?;
            json.push('\n');
            Ok(json)
        }
        ReportFormat::Yaml => serde_yaml::to_string(&report_body(stats, since))
            .context("Failed to serialize report to YAML"),
    }
}

fn report_body(stats: &PairStats, since: NaiveDate) -> PairReport<'_> {
    PairReport {
        since,
        developers: &stats.roster,
        pairs: stats.table.entries(),
    }
}

/// Writes rendered output to `path`, or to stdout when `path` is `-`.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    if path.as_os_str() == "-" {
        print!("{content}");
        return Ok(());
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote report");
    Ok(())
}

/// Opens a written report with the platform's default viewer.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to open report: {}", path.display()))?;
    Ok(())
}
