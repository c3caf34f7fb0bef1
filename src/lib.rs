//! # pair-days
//!
//! Counts how many distinct days each pair of developers committed together.
//!
//! Each commit is attributed to its author plus every `Co-authored-by:`
//! trailer in its message. Commits are bucketed by calendar day, and a pair
//! earns one day for every day on which at least one commit names them both.
//!
//! ## Quick Start
//!
//! ```rust
//! use pair_days::pairing::{aggregate, Commit, RawRecord};
//!
//! let record = RawRecord::new([
//!     "Alice|2025-05-01|Add parser",
//!     "",
//!     "Co-authored-by: Bob <bob@example.com>",
//!     "END_OF_COMMIT",
//! ]);
//! let commit = Commit::parse(&record).unwrap();
//! let stats = aggregate(&[commit]);
//!
//! assert_eq!(stats.table.get("Bob", "Alice"), 1);
//! assert_eq!(stats.roster, vec!["Alice", "Bob"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod error;
pub mod git;
pub mod pairing;
pub mod report;
pub mod utils;
pub mod window;

pub use crate::cli::Cli;
pub use crate::error::{HistoryError, RecordError};
pub use crate::pairing::{aggregate, Commit, Pair, PairDayTable, PairStats, Team};
pub use crate::window::HistoryWindow;

/// The current version of pair-days.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
