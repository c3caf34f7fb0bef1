//! Pair-day aggregation.
//!
//! Commits are bucketed by day. Within a day every pair that shares at least
//! one commit is counted once, however many commits they made together.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use super::commit::Commit;
use super::pair::Pair;

/// Number of distinct days each pair worked together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairDayTable {
    days: BTreeMap<Pair, u32>,
}

/// A pair and its day count, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairDays {
    /// The two developers, smaller identity first.
    pub developers: Pair,
    /// Distinct days on which they shared a commit.
    pub days: u32,
}

impl PairDayTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Day count for two developers in either order; 0 when they never paired.
    pub fn get(&self, a: &str, b: &str) -> u32 {
        Pair::new(a, b).map_or(0, |pair| self.days_for(&pair))
    }

    /// Day count for a canonical pair; 0 when absent.
    pub fn days_for(&self, pair: &Pair) -> u32 {
        self.days.get(pair).copied().unwrap_or(0)
    }

    /// Adds one day to the pair's count.
    pub fn record_day(&mut self, pair: Pair) {
        *self.days.entry(pair).or_insert(0) += 1;
    }

    /// Number of pairs with at least one day.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no pair was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Pairs in canonical order with their day counts.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, u32)> {
        self.days.iter().map(|(pair, days)| (pair, *days))
    }

    /// Keeps only pairs for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&Pair) -> bool) {
        self.days.retain(|pair, _| keep(pair));
    }

    /// Flattens the table into a list for serialization.
    pub fn entries(&self) -> Vec<PairDays> {
        self.iter()
            .map(|(pair, days)| PairDays {
                developers: pair.clone(),
                days,
            })
            .collect()
    }
}

impl FromIterator<(Pair, u32)> for PairDayTable {
    fn from_iter<I: IntoIterator<Item = (Pair, u32)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// Sorted, deduplicated list of every developer seen.
pub type Roster = Vec<String>;

/// Output of [`aggregate`]: the pair table and the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairStats {
    /// Distinct days per pair.
    pub table: PairDayTable,
    /// Every developer observed, sorted ascending.
    pub roster: Roster,
}

/// Aggregates commits into pair-day counts and a roster.
///
/// The result depends only on the multiset of commits, not their order.
pub fn aggregate<'a, I>(commits: I) -> PairStats
where
    I: IntoIterator<Item = &'a Commit>,
{
    let mut pairs_by_day: BTreeMap<NaiveDate, BTreeSet<Pair>> = BTreeMap::new();
    let mut roster = BTreeSet::new();

    for commit in commits {
        let developers: Vec<&str> = commit
            .developers
            .iter()
            .map(String::as_str)
            .filter(|dev| !dev.is_empty())
            .collect();
        roster.extend(developers.iter().map(|dev| (*dev).to_string()));

        if commit.is_paired() {
            let pairs_today = pairs_by_day.entry(commit.date).or_default();
            pairs_today.extend(pairs_among(&developers));
        }
    }

    let mut table = PairDayTable::new();
    for pairs in pairs_by_day.into_values() {
        for pair in pairs {
            table.record_day(pair);
        }
    }

    tracing::debug!(
        pairs = table.len(),
        developers = roster.len(),
        "aggregated pair days"
    );

    PairStats {
        table,
        roster: roster.into_iter().collect(),
    }
}

/// Every unordered combination of two distinct developers.
fn pairs_among<'a>(developers: &'a [&'a str]) -> impl Iterator<Item = Pair> + 'a {
    developers.iter().enumerate().flat_map(move |(i, a)| {
        developers[i + 1..]
            .iter()
            .filter_map(move |b| Pair::new(*a, *b))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn commit(date: &str, devs: &[&str]) -> Commit {
        Commit::new(day(date), devs.iter().copied())
    }

    fn pair(a: &str, b: &str) -> Pair {
        Pair::new(a, b).unwrap()
    }

    #[test]
    fn single_day_single_pair() {
        let stats = aggregate(&[commit("2025-05-01", &["Alice", "Bob"])]);

        assert_eq!(stats.table.get("Alice", "Bob"), 1);
        assert_eq!(stats.roster, vec!["Alice", "Bob"]);
    }

    #[test]
    fn lookup_is_symmetric() {
        let stats = aggregate(&[commit("2025-05-01", &["Bob", "Alice"])]);

        assert_eq!(stats.table.get("Alice", "Bob"), stats.table.get("Bob", "Alice"));
    }

    #[test]
    fn multiple_days_accumulate() {
        let stats = aggregate(&[
            commit("2025-05-01", &["Alice", "Bob"]),
            commit("2025-05-02", &["Alice", "Bob"]),
        ]);

        assert_eq!(stats.table.get("Alice", "Bob"), 2);
    }

    #[test]
    fn same_pair_same_day_counts_once() {
        let stats = aggregate(&[
            commit("2025-05-01", &["Alice", "Bob"]),
            commit("2025-05-01", &["Bob", "Alice"]),
            commit("2025-05-01", &["Alice", "Bob"]),
        ]);

        assert_eq!(stats.table.get("Alice", "Bob"), 1);
        assert_eq!(stats.table.len(), 1);
    }

    #[test]
    fn three_way_commit_expands_to_three_pairs() {
        let stats = aggregate(&[commit("2025-05-01", &["Alice", "Bob", "Carol"])]);

        let expected: PairDayTable = [
            (pair("Alice", "Bob"), 1),
            (pair("Alice", "Carol"), 1),
            (pair("Bob", "Carol"), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(stats.table, expected);
    }

    #[test]
    fn separate_commits_same_day_do_not_cross_pair() {
        let stats = aggregate(&[
            commit("2025-05-01", &["Alice", "Bob"]),
            commit("2025-05-01", &["Alice", "Carol"]),
        ]);

        assert_eq!(stats.table.get("Alice", "Bob"), 1);
        assert_eq!(stats.table.get("Alice", "Carol"), 1);
        assert_eq!(stats.table.days_for(&pair("Bob", "Carol")), 0);
    }

    #[test]
    fn solo_commit_only_touches_roster() {
        let stats = aggregate(&[commit("2025-05-01", &["Alice"])]);

        assert!(stats.table.is_empty());
        assert_eq!(stats.roster, vec!["Alice"]);
    }

    #[test]
    fn no_self_pairing() {
        let stats = aggregate(&[commit("2025-05-01", &["Alice", "Alice"])]);

        assert!(stats.table.is_empty());
        assert_eq!(stats.table.get("Alice", "Alice"), 0);
    }

    #[test]
    fn empty_input() {
        let commits: Vec<Commit> = Vec::new();
        let stats = aggregate(&commits);

        assert!(stats.table.is_empty());
        assert!(stats.roster.is_empty());
    }

    #[test]
    fn empty_identities_are_skipped() {
        let stats = aggregate(&[commit("2025-05-01", &["", "Alice"])]);

        assert_eq!(stats.roster, vec!["Alice"]);
        assert!(stats.table.is_empty());
    }

    #[test]
    fn roster_is_sorted_and_includes_unpaired() {
        let stats = aggregate(&[
            commit("2025-05-03", &["carol@example.com"]),
            commit("2025-05-01", &["Bob", "Alice"]),
            commit("2025-05-02", &["Dave"]),
        ]);

        assert_eq!(
            stats.roster,
            vec!["Alice", "Bob", "Dave", "carol@example.com"]
        );
    }

    #[test]
    fn entries_are_in_canonical_order() {
        let stats = aggregate(&[
            commit("2025-05-01", &["Carol", "Bob"]),
            commit("2025-05-02", &["Alice", "Bob"]),
            commit("2025-05-03", &["Alice", "Bob"]),
        ]);

        let entries = stats.table.entries();
        assert_eq!(
            entries,
            vec![
                PairDays {
                    developers: pair("Alice", "Bob"),
                    days: 2
                },
                PairDays {
                    developers: pair("Bob", "Carol"),
                    days: 1
                },
            ]
        );
    }

    // ── property tests ────────────────────────────────────────────

    mod prop {
        use super::*;
        use proptest::prelude::*;
        use proptest::prelude::prop;

        fn arb_commit() -> impl Strategy<Value = Commit> {
            (
                0_u32..10,
                prop::collection::vec(
                    prop_oneof![
                        Just("Alice"),
                        Just("Bob"),
                        Just("Carol"),
                        Just("dave@example.com"),
                        Just("Eve"),
                    ],
                    1..4,
                ),
            )
                .prop_map(|(offset, devs)| {
                    let date = day("2025-05-01") + chrono::Days::new(u64::from(offset));
                    Commit::new(date, devs)
                })
        }

        /// A commit list together with a random permutation of it.
        fn arb_commits_and_shuffle() -> impl Strategy<Value = (Vec<Commit>, Vec<Commit>)> {
            prop::collection::vec(arb_commit(), 0..30)
                .prop_flat_map(|commits| (Just(commits.clone()), Just(commits).prop_shuffle()))
        }

        proptest! {
            #[test]
            fn order_does_not_matter((commits, shuffled) in arb_commits_and_shuffle()) {
                prop_assert_eq!(aggregate(&commits), aggregate(&shuffled));
            }

            #[test]
            fn lookup_symmetric(commits in prop::collection::vec(arb_commit(), 0..30)) {
                let stats = aggregate(&commits);
                for a in &stats.roster {
                    for b in &stats.roster {
                        prop_assert_eq!(stats.table.get(a, b), stats.table.get(b, a));
                    }
                }
            }

            #[test]
            fn days_bounded_by_distinct_dates(
                commits in prop::collection::vec(arb_commit(), 0..30),
            ) {
                let distinct: BTreeSet<NaiveDate> = commits.iter().map(|c| c.date).collect();
                let stats = aggregate(&commits);
                for (_, days) in stats.table.iter() {
                    prop_assert!(days >= 1);
                    prop_assert!(days as usize <= distinct.len());
                }
            }

            #[test]
            fn duplicating_commits_is_idempotent(
                commits in prop::collection::vec(arb_commit(), 0..30),
            ) {
                let doubled: Vec<Commit> = commits.iter().chain(commits.iter()).cloned().collect();
                prop_assert_eq!(aggregate(&commits), aggregate(&doubled));
            }
        }
    }
}
