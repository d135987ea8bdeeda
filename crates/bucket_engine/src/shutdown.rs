use std::future::Future;

use engine_logging::engine_debug;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Owns the worker tracker, the original result sender and the reporter's
/// stop token.
///
/// Workers only ever hold clones of the sender, so the channel closes when
/// [`finish`](Self::finish) drops the original after every worker is done.
/// `finish` consumes the coordinator, which makes a second close or a second
/// stop impossible.
pub struct ShutdownCoordinator {
    tracker: TaskTracker,
    results: mpsc::UnboundedSender<String>,
    stop: CancellationToken,
}

impl ShutdownCoordinator {
    pub fn new(results: mpsc::UnboundedSender<String>, stop: CancellationToken) -> Self {
        Self {
            tracker: TaskTracker::new(),
            results,
            stop,
        }
    }

    /// Sender handed to a worker. Dropped when the worker ends.
    pub fn results(&self) -> mpsc::UnboundedSender<String> {
        self.results.clone()
    }

    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn(task);
    }

    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Waits for every spawned worker, then closes the result channel and
    /// stops the reporter.
    pub async fn finish(self) {
        self.tracker.close();
        self.tracker.wait().await;
        engine_debug!("All workers done; closing result channel");
        drop(self.results);
        self.stop.cancel();
    }
}
