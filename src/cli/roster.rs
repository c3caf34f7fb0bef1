//! Roster command: lists every developer seen in the window.

use anyhow::Result;
use clap::Parser;

use super::history::HistoryArgs;
use crate::utils::Settings;

/// Roster command options.
#[derive(Parser, Debug)]
pub struct RosterCommand {
    /// History selection.
    #[command(flatten)]
    pub history: HistoryArgs,
}

impl RosterCommand {
    /// Executes the roster command.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load()?;
        let (stats, _) = self.history.load_stats(&settings)?;

        for developer in &stats.roster {
            println!("{developer}");
        }

        Ok(())
    }
}
