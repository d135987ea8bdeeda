use std::sync::atomic::{AtomicU64, Ordering};

use bucket_core::{FailureReason, ProbeOutcome};

/// Run-wide progress counters, written by workers and read by the reporter.
///
/// Reads are independent snapshots; they are not aligned with each other.
#[derive(Debug, Default)]
pub struct RunCounters {
    attempted: AtomicU64,
    succeeded: AtomicU64,
    rejected: AtomicU64,
    unreachable: AtomicU64,
    cancelled: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    pub attempted: u64,
    pub succeeded: u64,
    pub rejected: u64,
    pub unreachable: u64,
    pub cancelled: u64,
}

impl CounterSnapshot {
    pub fn failed(&self) -> u64 {
        self.rejected + self.unreachable + self.cancelled
    }

    pub fn completed(&self) -> u64 {
        self.succeeded + self.failed()
    }
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one dispatched probe. Called once per candidate that got a slot.
    pub fn record_attempt(&self) {
        self.attempted.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts the outcome of one probe in exactly one bucket.
    pub fn record_outcome(&self, outcome: &ProbeOutcome) {
        let counter = match outcome {
            ProbeOutcome::Success => &self.succeeded,
            ProbeOutcome::Failure(FailureReason::Status(_)) => &self.rejected,
            ProbeOutcome::Failure(FailureReason::Transport(_)) => &self.unreachable,
            ProbeOutcome::Failure(FailureReason::Cancelled) => &self.cancelled,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn attempted(&self) -> u64 {
        self.attempted.load(Ordering::Relaxed)
    }

    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.snapshot().failed()
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            attempted: self.attempted.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            unreachable: self.unreachable.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
        }
    }
}
