//! Team membership and filtering.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::aggregate::{PairDayTable, PairStats};
use super::pair::Pair;

/// A set of developer identities to restrict the report to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    members: BTreeSet<String>,
}

impl Team {
    /// Loads a team file: a JSON array of identities, or a YAML sequence for
    /// `.yaml`/`.yml` files.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read team file: {}", path.display()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
            });

        let team = if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
        .with_context(|| format!("Failed to parse team file: {}", path.display()))?;

        tracing::debug!(members = team.len(), path = %path.display(), "loaded team");
        Ok(team)
    }

    /// Parses a JSON array of identities.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .context("Team file must be a JSON array of developer names")
    }

    /// Parses a YAML sequence of identities.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str::<Self>(yaml)
            .context("Team file must be a YAML list of developer names")
    }

    /// Whether `developer` belongs to the team.
    pub fn contains(&self, developer: &str) -> bool {
        self.members.contains(developer)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True for a team without members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Roster entries that belong to the team, order preserved.
    pub fn filter_roster(&self, roster: &[String]) -> Vec<String> {
        roster
            .iter()
            .filter(|dev| self.contains(dev))
            .cloned()
            .collect()
    }

    /// Pairs whose two developers both belong to the team.
    pub fn filter_table(&self, table: &PairDayTable) -> PairDayTable {
        table
            .iter()
            .filter(|(pair, _)| self.covers(pair))
            .map(|(pair, days)| (pair.clone(), days))
            .collect()
    }

    fn covers(&self, pair: &Pair) -> bool {
        let (a, b) = pair.members();
        self.contains(a) && self.contains(b)
    }
}

impl<S: Into<String>> FromIterator<S> for Team {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl PairStats {
    /// Narrows both the roster and the table to `team`.
    pub fn restrict_to(&mut self, team: &Team) {
        self.roster = team.filter_roster(&self.roster);
        self.table.retain(|pair| team.covers(pair));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pair(a: &str, b: &str) -> Pair {
        Pair::new(a, b).unwrap()
    }

    fn sample_table() -> PairDayTable {
        [
            (pair("alice@example.com", "Bob"), 2),
            (pair("alice@example.com", "Carol"), 1),
            (pair("Bob", "Carol"), 3),
            (pair("alice@example.com", "dave@example.com"), 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn parse_json_team() {
        let team =
            Team::from_json(r#"["alice@example.com", "Bob", "carol@example.com"]"#).unwrap();

        assert_eq!(team.len(), 3);
        assert!(team.contains("Bob"));
        assert!(!team.contains("bob"));
    }

    #[test]
    fn parse_empty_json_team() {
        let team = Team::from_json("[]").unwrap();
        assert!(team.is_empty());
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(Team::from_json(r#"{"members": ["Bob"]}"#).is_err());
    }

    #[test]
    fn filter_roster_keeps_order() {
        let roster: Vec<String> = ["alice@example.com", "Bob", "Carol", "dave@example.com"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let team: Team = ["alice@example.com", "Carol"].into_iter().collect();

        assert_eq!(team.filter_roster(&roster), vec!["alice@example.com", "Carol"]);
    }

    #[test]
    fn filter_table_requires_both_members() {
        let team: Team = ["alice@example.com", "Carol"].into_iter().collect();
        let filtered = team.filter_table(&sample_table());

        let expected: PairDayTable = [(pair("alice@example.com", "Carol"), 1)]
            .into_iter()
            .collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn restrict_stats_in_place() {
        let mut stats = PairStats {
            table: sample_table(),
            roster: vec![
                "Bob".to_string(),
                "Carol".to_string(),
                "alice@example.com".to_string(),
                "dave@example.com".to_string(),
            ],
        };
        let team: Team = ["Bob", "Carol", "erin@example.com"].into_iter().collect();

        stats.restrict_to(&team);

        assert_eq!(stats.roster, vec!["Bob", "Carol"]);
        assert_eq!(stats.table.len(), 1);
        assert_eq!(stats.table.get("Carol", "Bob"), 3);
    }

    #[test]
    fn load_json_and_yaml_files() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("team.json");
        let yaml_path = temp_dir.path().join("team.yml");
        fs::write(&json_path, r#"["Alice", "Bob"]"#).unwrap();
        fs::write(&yaml_path, "- Alice\n- Bob\n").unwrap();

        let from_json = Team::load_from_file(&json_path).unwrap();
        let from_yaml = Team::load_from_file(&yaml_path).unwrap();

        assert_eq!(from_json, from_yaml);
        assert!(from_json.contains("Alice"));
    }

    #[test]
    fn load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = Team::load_from_file(temp_dir.path().join("nope.json")).unwrap_err();

        assert!(err.to_string().contains("Failed to read team file"));
    }
}
