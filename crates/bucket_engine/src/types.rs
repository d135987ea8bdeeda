use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LimitError {
    #[error("failed to query open file descriptor limit: {0}")]
    Ceiling(io::Error),
    #[error("failed to read open file count: {0}")]
    Usage(io::Error),
    #[error("unexpected content in {path}: {content:?}")]
    Malformed { path: String, content: String },
    #[error("open file count is not available on this platform")]
    Unsupported,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Limits(#[from] LimitError),
    #[error("failed to build http client: {0}")]
    HttpClient(String),
    #[error("failed to create output file {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write result: {0}")]
    Sink(#[source] io::Error),
    #[error("concurrency slot pool closed")]
    SlotPoolClosed,
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Totals for one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub total_candidates: usize,
    pub attempted: u64,
    pub succeeded: u64,
    pub rejected: u64,
    pub unreachable: u64,
    pub cancelled: u64,
    pub slots_acquired: u64,
    pub slots_released: u64,
    /// Accepted bucket names in completion order.
    pub accepted: Vec<String>,
    pub elapsed: Duration,
}

impl ScanSummary {
    pub fn failed(&self) -> u64 {
        self.rejected + self.unreachable + self.cancelled
    }

    /// Candidates never dispatched because the run was cancelled.
    pub fn skipped(&self) -> u64 {
        (self.total_candidates as u64).saturating_sub(self.attempted)
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "candidates={} attempted={} found={} rejected={} unreachable={} cancelled={} skipped={} elapsed={:.1}s",
            self.total_candidates,
            self.attempted,
            self.succeeded,
            self.rejected,
            self.unreachable,
            self.cancelled,
            self.skipped(),
            self.elapsed.as_secs_f64()
        )
    }
}
