/// Descriptors kept back for the output file, the log file and the reporter's
/// reads of `/proc`.
pub const DEFAULT_FD_RESERVE: u64 = 10;

/// Resolved admission budget for one run. Computed once before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyBudget {
    /// Number of concurrency slots; always at least one.
    pub slots: usize,
    /// Open file descriptor ceiling the budget was derived from.
    pub ceiling: u64,
}

impl ConcurrencyBudget {
    pub fn new(requested: usize, ceiling: u64, reserve: u64) -> Self {
        Self {
            slots: resolve_budget(requested, ceiling, reserve),
            ceiling,
        }
    }
}

/// `min(requested, ceiling - reserve)`, never below one.
///
/// A budget of zero would deadlock the dispatch loop, so a ceiling at or
/// below the reserve still yields a single slot.
pub fn resolve_budget(requested: usize, ceiling: u64, reserve: u64) -> usize {
    let headroom = ceiling.saturating_sub(reserve);
    let requested = u64::try_from(requested).unwrap_or(u64::MAX);
    let slots = requested.min(headroom).max(1);
    usize::try_from(slots).unwrap_or(usize::MAX)
}
