use std::sync::Arc;
use std::time::Instant;

use bucket_core::{Candidate, ConcurrencyBudget};
use engine_logging::{engine_debug, engine_info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    Console, ProbeScheduler, Prober, ResourceLimitProvider, ResultCollector, ResultSink,
    RunCounters, ScanConfig, ScanError, ScanSummary, ShutdownCoordinator, SlotPool,
    StatsReporter,
};

/// Runs one enumeration: reporter, dispatch, collection and shutdown.
pub struct Scanner {
    config: Arc<ScanConfig>,
    prober: Arc<dyn Prober>,
    limits: Arc<dyn ResourceLimitProvider>,
    console: Arc<Console>,
}

impl Scanner {
    pub fn new(
        config: Arc<ScanConfig>,
        prober: Arc<dyn Prober>,
        limits: Arc<dyn ResourceLimitProvider>,
        console: Arc<Console>,
    ) -> Self {
        Self {
            config,
            prober,
            limits,
            console,
        }
    }

    /// Probes every candidate once with at most `budget.slots` in flight.
    ///
    /// Returns after all dispatched probes are done and every accepted name
    /// has reached `sink`. Cancelling `cancel` stops dispatch early; probes
    /// already in flight resolve as cancelled.
    pub async fn run<S>(
        &self,
        candidates: Vec<Candidate>,
        budget: ConcurrencyBudget,
        sink: S,
        cancel: CancellationToken,
    ) -> Result<ScanSummary, ScanError>
    where
        S: ResultSink + 'static,
    {
        let started = Instant::now();
        let total_candidates = candidates.len();
        let counters = Arc::new(RunCounters::new());
        let slots = Arc::new(SlotPool::new(budget.slots));
        let stop = CancellationToken::new();
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        engine_info!(
            "Scanning {} candidates with {} slots (fd ceiling {})",
            total_candidates,
            budget.slots,
            budget.ceiling
        );

        let reporter = StatsReporter::new(
            counters.clone(),
            slots.clone(),
            self.limits.clone(),
            self.console.clone(),
            budget,
            total_candidates,
            self.config.stats_interval,
        );
        let reporter = tokio::spawn(reporter.run(stop.clone()));
        let collector = tokio::spawn(
            ResultCollector::new(sink, self.console.clone()).run(results_rx),
        );

        let coordinator = ShutdownCoordinator::new(results_tx, stop);
        let scheduler = ProbeScheduler::new(
            self.prober.clone(),
            counters.clone(),
            slots.clone(),
            self.console.clone(),
            self.config.verbose,
        );
        let dispatched = scheduler.dispatch(candidates, &coordinator, &cancel).await;
        engine_debug!(
            "Dispatch finished, waiting on {} in-flight probes",
            coordinator.in_flight()
        );
        // Shut down even when dispatch failed, so the collector and the
        // reporter always terminate.
        coordinator.finish().await;

        let reporter_result = reporter.await;
        let collected = collector.await;
        self.console.clear_line();

        let dispatched = dispatched?;
        reporter_result?;
        let accepted = collected??;

        let counts = counters.snapshot();
        let summary = ScanSummary {
            total_candidates,
            attempted: counts.attempted,
            succeeded: counts.succeeded,
            rejected: counts.rejected,
            unreachable: counts.unreachable,
            cancelled: counts.cancelled,
            slots_acquired: slots.acquired(),
            slots_released: slots.released(),
            accepted,
            elapsed: started.elapsed(),
        };
        engine_info!("Scan finished ({} dispatched): {}", dispatched, summary);
        Ok(summary)
    }
}
