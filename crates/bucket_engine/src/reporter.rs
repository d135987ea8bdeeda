use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bucket_core::ConcurrencyBudget;
use engine_logging::engine_trace;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{Console, CounterSnapshot, ResourceLimitProvider, RunCounters, SlotPool};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// One sample of run progress, rendered as the single-line status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub counters: CounterSnapshot,
    pub active_workers: usize,
    pub max_workers: usize,
    pub open_files: Option<u64>,
    pub max_open_files: u64,
    pub total_candidates: usize,
}

impl StatsSnapshot {
    /// Dispatched probes as a percentage of all candidates.
    pub fn progress(&self) -> f64 {
        if self.total_candidates == 0 {
            return 100.0;
        }
        self.counters.attempted as f64 / self.total_candidates as f64 * 100.0
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Attempted: {} | Found: {} | Rejected: {} | Unreachable: {} | Workers: {}/{} | Open files: ",
            self.counters.attempted,
            self.counters.succeeded,
            self.counters.rejected,
            self.counters.unreachable,
            self.active_workers,
            self.max_workers,
        )?;
        match self.open_files {
            Some(open) => write!(f, "{open}")?,
            None => f.write_str("-")?,
        }
        write!(f, "/{} | Progress: {:.2}%", self.max_open_files, self.progress())
    }
}

/// Periodic sampler of the run counters.
pub struct StatsReporter {
    counters: Arc<RunCounters>,
    slots: Arc<SlotPool>,
    limits: Arc<dyn ResourceLimitProvider>,
    console: Arc<Console>,
    budget: ConcurrencyBudget,
    total_candidates: usize,
    interval: Duration,
}

impl StatsReporter {
    pub fn new(
        counters: Arc<RunCounters>,
        slots: Arc<SlotPool>,
        limits: Arc<dyn ResourceLimitProvider>,
        console: Arc<Console>,
        budget: ConcurrencyBudget,
        total_candidates: usize,
        interval: Duration,
    ) -> Self {
        Self {
            counters,
            slots,
            limits,
            console,
            budget,
            total_candidates,
            interval,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let open_files = match self.limits.usage() {
            Ok(open) => Some(open),
            Err(err) => {
                engine_trace!("Open file count unavailable: {}", err);
                None
            }
        };
        StatsSnapshot {
            counters: self.counters.snapshot(),
            active_workers: self.budget.slots.saturating_sub(self.slots.available()),
            max_workers: self.budget.slots,
            open_files,
            max_open_files: self.budget.ceiling,
            total_candidates: self.total_candidates,
        }
    }

    /// Renders a snapshot every interval until `stop` fires.
    pub async fn run(self, stop: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval.max(MIN_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = stop.cancelled() => break,
                _ = ticker.tick() => {
                    let line = self.snapshot().to_string();
                    self.console.progress(&line);
                }
            }
        }
    }
}
