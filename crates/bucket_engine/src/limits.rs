use std::fs;
use std::io;
use std::sync::Arc;

use bucket_core::ConcurrencyBudget;
use engine_logging::engine_info;

use crate::{LimitError, ScanError};

const FILE_NR_PATH: &str = "/proc/sys/fs/file-nr";

/// Source of the open file descriptor ceiling and current usage.
pub trait ResourceLimitProvider: Send + Sync {
    /// Soft limit on open file descriptors for this process.
    fn ceiling(&self) -> Result<u64, LimitError>;
    /// Open file descriptors as reported by the OS.
    fn usage(&self) -> Result<u64, LimitError>;
}

/// Queries `RLIMIT_NOFILE` and, on Linux, the system-wide handle count.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResourceLimits;

impl ResourceLimitProvider for SystemResourceLimits {
    fn ceiling(&self) -> Result<u64, LimitError> {
        nofile_soft_limit().map_err(LimitError::Ceiling)
    }

    fn usage(&self) -> Result<u64, LimitError> {
        if !cfg!(target_os = "linux") {
            return Err(LimitError::Unsupported);
        }
        let content = fs::read_to_string(FILE_NR_PATH).map_err(LimitError::Usage)?;
        parse_file_nr(&content)
    }
}

#[cfg(unix)]
fn nofile_soft_limit() -> io::Result<u64> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: getrlimit only writes into the struct we pass.
    let ret = unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut limit) };
    if ret != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(limit.rlim_cur as u64)
}

#[cfg(not(unix))]
fn nofile_soft_limit() -> io::Result<u64> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "RLIMIT_NOFILE is not available on this platform",
    ))
}

/// First field of `/proc/sys/fs/file-nr` is the number of allocated handles.
fn parse_file_nr(content: &str) -> Result<u64, LimitError> {
    content
        .split_whitespace()
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| LimitError::Malformed {
            path: FILE_NR_PATH.to_string(),
            content: content.to_string(),
        })
}

/// Fixed ceiling with no usage reporting, for platforms without the system
/// queries and for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedResourceLimits {
    pub ceiling: u64,
    pub usage: Option<u64>,
}

impl FixedResourceLimits {
    pub fn new(ceiling: u64) -> Self {
        Self {
            ceiling,
            usage: None,
        }
    }
}

impl Default for FixedResourceLimits {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl ResourceLimitProvider for FixedResourceLimits {
    fn ceiling(&self) -> Result<u64, LimitError> {
        Ok(self.ceiling)
    }

    fn usage(&self) -> Result<u64, LimitError> {
        self.usage.ok_or(LimitError::Unsupported)
    }
}

pub fn default_limits() -> Arc<dyn ResourceLimitProvider> {
    if cfg!(unix) {
        Arc::new(SystemResourceLimits)
    } else {
        Arc::new(FixedResourceLimits::default())
    }
}

/// Turns the requested parallelism into the run's concurrency budget.
pub struct ConcurrencyGovernor {
    limits: Arc<dyn ResourceLimitProvider>,
    reserve: u64,
}

impl ConcurrencyGovernor {
    pub fn new(limits: Arc<dyn ResourceLimitProvider>, reserve: u64) -> Self {
        Self { limits, reserve }
    }

    /// Queries the ceiling once. A failed query is fatal for the run.
    pub fn resolve(&self, requested: usize) -> Result<ConcurrencyBudget, ScanError> {
        let ceiling = self.limits.ceiling()?;
        let budget = ConcurrencyBudget::new(requested, ceiling, self.reserve);
        if budget.slots < requested {
            engine_info!(
                "Clamped concurrency from {} to {} (fd ceiling {}, reserve {})",
                requested,
                budget.slots,
                ceiling,
                self.reserve
            );
        }
        Ok(budget)
    }
}
