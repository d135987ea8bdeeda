use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::ScanError;

/// Fixed-size pool of concurrency slots.
///
/// Every acquisition is counted; every [`Slot`] counts its own release when
/// dropped, so the two totals can be compared once a run is over.
#[derive(Debug)]
pub struct SlotPool {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    acquired: AtomicU64,
    released: Arc<AtomicU64>,
}

/// Admission ticket. Dropping it returns the slot to the pool.
#[derive(Debug)]
pub struct Slot {
    _permit: OwnedSemaphorePermit,
    released: Arc<AtomicU64>,
}

impl SlotPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
            acquired: AtomicU64::new(0),
            released: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Waits until a slot is free.
    pub async fn acquire(&self) -> Result<Slot, ScanError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| ScanError::SlotPoolClosed)?;
        self.acquired.fetch_add(1, Ordering::Relaxed);
        Ok(Slot {
            _permit: permit,
            released: self.released.clone(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    pub fn in_use(&self) -> usize {
        self.capacity.saturating_sub(self.available())
    }

    pub fn acquired(&self) -> u64 {
        self.acquired.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> u64 {
        self.released.load(Ordering::Relaxed)
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::Relaxed);
    }
}
