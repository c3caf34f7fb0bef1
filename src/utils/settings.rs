//! Settings and configuration utilities.
//!
//! Settings are read from $HOME/.pair-days/settings.json. The `env` map is a
//! fallback for environment variables, and `defaults` supplies report options
//! not given on the command line.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::report::ReportFormat;

/// Environment variable holding the default lookback in months.
pub const MONTHS_ENV: &str = "PAIR_DAYS_MONTHS";

/// Environment variable holding the default team file path.
pub const TEAM_ENV: &str = "PAIR_DAYS_TEAM";

/// Settings loaded from $HOME/.pair-days/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
    /// Report defaults.
    #[serde(default)]
    pub defaults: ReportDefaults,
}

/// Report options used when the command line leaves them out.
#[derive(Debug, Default, Deserialize)]
pub struct ReportDefaults {
    /// Lookback in months.
    pub months: Option<u32>,
    /// Team file to filter by.
    pub team: Option<PathBuf>,
    /// Output format.
    pub format: Option<ReportFormat>,
    /// Output path.
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // A missing file just means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".pair-days").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Lookback in months from the environment, then settings defaults.
    pub fn months(&self) -> Result<Option<u32>> {
        match self.get_env_var(MONTHS_ENV) {
            Some(value) => value
                .trim()
                .parse()
                .map(Some)
                .with_context(|| format!("{MONTHS_ENV} must be a whole number, got '{value}'")),
            None => Ok(self.defaults.months),
        }
    }

    /// Team file from the environment, then settings defaults.
    pub fn team(&self) -> Option<PathBuf> {
        self.get_env_var(TEAM_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| self.defaults.team.clone())
    }
}
