//! Splitting `git log` output into per-commit records.

use std::io::{self, BufRead};

use crate::pairing::{RawRecord, RECORD_SENTINEL};

/// Reads raw commit records from a line-oriented stream.
///
/// A record ends at the first line that ends with [`RECORD_SENTINEL`]. The
/// sentinel stays on the line; [`crate::pairing::Commit::parse`] strips it.
pub struct RecordReader<R> {
    lines: io::Lines<R>,
    pending: Vec<String>,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new(),
            done: false,
        }
    }

    fn take_pending(&mut self) -> Option<RawRecord> {
        // Blank separator lines between records carry no data.
        if self.pending.iter().all(|line| line.trim().is_empty()) {
            self.pending.clear();
            return None;
        }
        Some(RawRecord {
            lines: std::mem::take(&mut self.pending),
        })
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = io::Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if self.pending.is_empty() && line.trim().is_empty() {
                        continue;
                    }
                    let ends_record = line.ends_with(RECORD_SENTINEL);
                    self.pending.push(line);
                    if ends_record {
                        if let Some(record) = self.take_pending() {
                            return Some(Ok(record));
                        }
                    }
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    // Output cut short without a final sentinel.
                    return self.take_pending().map(Ok);
                }
            }
        }
    }
}
