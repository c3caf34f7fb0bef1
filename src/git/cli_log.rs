//! History retrieval through the `git log` command.

use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;

use crate::error::HistoryError;
use crate::git::records::RecordReader;
use crate::git::HistorySource;
use crate::pairing::{RawRecord, RECORD_SENTINEL};
use crate::window::HistoryWindow;

/// Reads history by running `git log` and streaming its output.
#[derive(Debug, Clone)]
pub struct GitCliSource {
    repo: PathBuf,
}

impl GitCliSource {
    /// Source reading the repository at `repo`.
    pub fn new<P: AsRef<Path>>(repo: P) -> Self {
        Self {
            repo: repo.as_ref().to_path_buf(),
        }
    }

    /// Arguments passed to `git`, after `-C <repo>`.
    pub fn log_args(window: &HistoryWindow) -> Vec<String> {
        vec![
            "log".to_string(),
            format!("--since={}", window.since_arg()),
            format!("--pretty=format:%an|%ad|%B{RECORD_SENTINEL}"),
            "--date=short".to_string(),
        ]
    }
}

impl HistorySource for GitCliSource {
    fn records(&self, window: &HistoryWindow) -> Result<Vec<RawRecord>, HistoryError> {
        let args = Self::log_args(window);
        tracing::debug!(repo = %self.repo.display(), ?args, "running git log");

        let child = Command::new("git")
            .arg("-C")
            .arg(&self.repo)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(HistoryError::Spawn)?;

        let records = read_records(child)?;
        tracing::info!(records = records.len(), "read git log output");
        Ok(records)
    }
}

/// Streams records from a `git log` child and waits for it to exit.
///
/// Stderr is drained on its own thread so a chatty child never blocks on a
/// full pipe while stdout is being read.
fn read_records(mut child: Child) -> Result<Vec<RawRecord>, HistoryError> {
    let stderr_reader = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut stderr = String::new();
            // Best effort; the exit status is what decides failure.
            let _ = pipe.read_to_string(&mut stderr);
            stderr
        })
    });

    let mut records = Vec::new();
    let mut read_error = None;
    if let Some(stdout) = child.stdout.take() {
        // The reader owns stdout and closes it when the loop ends, so the
        // child cannot stall on a pipe nobody reads.
        for record in RecordReader::new(BufReader::new(stdout)) {
            match record {
                Ok(record) => records.push(record),
                Err(err) => {
                    read_error = Some(err);
                    break;
                }
            }
        }
    }

    let status = child.wait().map_err(HistoryError::Spawn)?;
    let stderr = stderr_reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    if !status.success() {
        return Err(HistoryError::GitFailed {
            status: status.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }
    if let Some(err) = read_error {
        return Err(HistoryError::Read(err));
    }

    Ok(records)
}
