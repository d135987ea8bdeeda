use std::time::Duration;

use bucket_core::DEFAULT_FD_RESERVE;

use crate::ProbeSettings;

/// Immutable configuration for one run, built once at startup.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Parallelism asked for by the operator, before clamping.
    pub requested_concurrency: usize,
    /// Echo every failed probe to the terminal.
    pub verbose: bool,
    /// Descriptors held back from the budget for the process itself.
    pub fd_reserve: u64,
    pub stats_interval: Duration,
    pub probe: ProbeSettings,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            requested_concurrency: 10,
            verbose: false,
            fd_reserve: DEFAULT_FD_RESERVE,
            stats_interval: Duration::from_millis(100),
            probe: ProbeSettings::default(),
        }
    }
}
