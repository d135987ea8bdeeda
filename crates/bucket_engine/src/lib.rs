//! Bucket engine: concurrent probing, progress reporting and result collection.
mod collector;
mod config;
mod console;
mod counters;
mod limits;
mod probe;
mod reporter;
mod scan;
mod scheduler;
mod shutdown;
mod slots;
mod types;

pub use collector::{FileSink, ResultCollector, ResultSink};
pub use config::ScanConfig;
pub use console::Console;
pub use counters::{CounterSnapshot, RunCounters};
pub use limits::{
    default_limits, ConcurrencyGovernor, FixedResourceLimits, ResourceLimitProvider,
    SystemResourceLimits,
};
pub use probe::{classify_status, ProbeSettings, Prober, ReqwestProber};
pub use reporter::{StatsReporter, StatsSnapshot};
pub use scan::Scanner;
pub use scheduler::ProbeScheduler;
pub use shutdown::ShutdownCoordinator;
pub use slots::{Slot, SlotPool};
pub use types::{LimitError, ScanError, ScanSummary};
