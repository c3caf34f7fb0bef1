//! Report command: renders the pair-day matrix for a history window.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::history::HistoryArgs;
use crate::report::{self, ReportFormat};
use crate::utils::Settings;
use crate::window::HistoryWindow;

/// Report command options.
#[derive(Parser, Debug)]
pub struct ReportCommand {
    /// History selection.
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Output format [default: html].
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// File to write, or `-` for stdout [default: output.<format>].
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Open the written report with the system viewer.
    #[arg(long)]
    pub open: bool,
}

impl ReportCommand {
    /// Executes the report command.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load()?;
        let (stats, window) = self.history.load_stats(&settings)?;
        self.write(&settings, &stats, window)
    }

    /// Executes the report command against a fixed window.
    pub fn execute_in(self, settings: &Settings, window: HistoryWindow) -> Result<()> {
        let (stats, window) = self.history.load_stats_in(settings, window)?;
        self.write(settings, &stats, window)
    }

    fn write(
        &self,
        settings: &Settings,
        stats: &crate::pairing::PairStats,
        window: HistoryWindow,
    ) -> Result<()> {
        let format = self
            .format
            .or(settings.defaults.format)
            .unwrap_or_default();
        let output = self
            .output
            .clone()
            .or_else(|| settings.defaults.output.clone())
            .unwrap_or_else(|| PathBuf::from(format!("output.{}", format.extension())));

        let content = report::render(stats, window.since, format)?;
        report::write_report(&content, &output)?;

        if output.as_os_str() != "-" {
            eprintln!("Wrote {}", output.display());
            if self.open {
                report::open_in_viewer(&output)?;
            }
        }

        Ok(())
    }
}
