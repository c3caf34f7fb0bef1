//! CLI interface for pair-days.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod history;
pub mod report;
pub mod roster;

pub use history::HistoryArgs;
pub use report::ReportCommand;
pub use roster::RosterCommand;

/// pair-days: how often each pair of developers committed together.
#[derive(Parser)]
#[command(name = "pair-days")]
#[command(
    about = "Counts the days each pair of developers shared a commit",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Renders the pair-day matrix as HTML, JSON, CSV or YAML.
    Report(ReportCommand),
    /// Lists every developer who committed in the window.
    Roster(RosterCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Report(report_cmd) => report_cmd.execute(),
            Commands::Roster(roster_cmd) => roster_cmd.execute(),
        }
    }
}
