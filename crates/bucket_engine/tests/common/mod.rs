#![allow(dead_code)]

use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use bucket_core::{Candidate, FailureReason, ProbeOutcome, TransportKind};
use bucket_engine::{Console, Prober};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

/// Clonable in-memory writer standing in for the terminal.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn captured_console() -> (Arc<Console>, SharedBuffer) {
    init_logging();
    let buffer = SharedBuffer::default();
    (Arc::new(Console::new(buffer.clone())), buffer)
}

/// Deterministic prober: URLs in `found` succeed, the rest fail.
pub struct ScriptedProber {
    found: HashSet<String>,
    failure: FailureReason,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProber {
    pub fn new<I, S>(found: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            found: found.into_iter().map(Into::into).collect(),
            failure: FailureReason::Status(404),
            delay: Duration::ZERO,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always_unreachable() -> Self {
        Self::new(Vec::<String>::new())
            .with_failure(FailureReason::Transport(TransportKind::Connect))
    }

    pub fn with_failure(mut self, failure: FailureReason) -> Self {
        self.failure = failure;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Highest number of probes observed running at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.calls.lock().unwrap().push(candidate.url().to_string());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.found.contains(candidate.url()) {
            ProbeOutcome::Success
        } else {
            ProbeOutcome::Failure(self.failure.clone())
        }
    }
}
