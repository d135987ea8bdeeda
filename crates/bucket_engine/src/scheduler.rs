use std::sync::Arc;

use bucket_core::{Candidate, FailureReason, ProbeOutcome};
use engine_logging::engine_debug;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{Console, Prober, RunCounters, ScanError, ShutdownCoordinator, Slot, SlotPool};

/// Dispatches one worker per candidate, throttled by the slot pool.
pub struct ProbeScheduler {
    prober: Arc<dyn Prober>,
    counters: Arc<RunCounters>,
    slots: Arc<SlotPool>,
    console: Arc<Console>,
    verbose: bool,
}

impl ProbeScheduler {
    pub fn new(
        prober: Arc<dyn Prober>,
        counters: Arc<RunCounters>,
        slots: Arc<SlotPool>,
        console: Arc<Console>,
        verbose: bool,
    ) -> Self {
        Self {
            prober,
            counters,
            slots,
            console,
            verbose,
        }
    }

    /// Acquires a slot for each candidate in order before spawning its
    /// worker, so dispatch itself blocks while the pool is exhausted.
    ///
    /// Stops dispatching as soon as `cancel` fires. Returns the number of
    /// candidates dispatched.
    pub async fn dispatch(
        &self,
        candidates: Vec<Candidate>,
        coordinator: &ShutdownCoordinator,
        cancel: &CancellationToken,
    ) -> Result<usize, ScanError> {
        let mut dispatched = 0;
        for candidate in candidates {
            let slot = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    engine_debug!("Dispatch cancelled after {} candidates", dispatched);
                    break;
                }
                slot = self.slots.acquire() => slot?,
            };

            self.counters.record_attempt();
            let worker = Worker {
                prober: self.prober.clone(),
                counters: self.counters.clone(),
                console: self.console.clone(),
                results: coordinator.results(),
                cancel: cancel.clone(),
                verbose: self.verbose,
            };
            coordinator.spawn(worker.run(candidate, slot));
            dispatched += 1;
        }
        Ok(dispatched)
    }
}

struct Worker {
    prober: Arc<dyn Prober>,
    counters: Arc<RunCounters>,
    console: Arc<Console>,
    results: mpsc::UnboundedSender<String>,
    cancel: CancellationToken,
    verbose: bool,
}

impl Worker {
    /// `slot` is held for the whole probe and released on every exit path
    /// when it goes out of scope.
    async fn run(self, candidate: Candidate, slot: Slot) {
        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => ProbeOutcome::Failure(FailureReason::Cancelled),
            outcome = self.prober.probe(&candidate) => outcome,
        };
        self.counters.record_outcome(&outcome);

        match outcome {
            ProbeOutcome::Success => {
                // The collector outlives every worker; a failed send means
                // the run is already being torn down.
                let _ = self.results.send(candidate.reported_name());
            }
            ProbeOutcome::Failure(reason) => {
                if self.verbose && reason != FailureReason::Cancelled {
                    self.console.failure(candidate.url(), &reason);
                }
            }
        }
        drop(slot);
    }
}
