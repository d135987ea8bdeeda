use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use engine_logging::engine_debug;
use tokio::sync::mpsc;

use crate::{Console, ScanError};

/// Destination for accepted bucket names.
pub trait ResultSink: Send {
    fn append(&mut self, bucket: &str) -> io::Result<()>;
}

/// Writes one name per line, flushed as each name arrives.
///
/// Writes are blocking and run on the collector task. One short line per
/// accepted bucket keeps that cheap; a slower sink should move its writes to
/// `spawn_blocking`.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Creates or truncates `path`.
    pub fn create(path: &Path) -> Result<Self, ScanError> {
        let file = File::create(path).map_err(|source| ScanError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file })
    }
}

impl ResultSink for FileSink {
    fn append(&mut self, bucket: &str) -> io::Result<()> {
        self.file.write_all(format!("{bucket}\n").as_bytes())?;
        self.file.flush()
    }
}

impl ResultSink for Vec<String> {
    fn append(&mut self, bucket: &str) -> io::Result<()> {
        self.push(bucket.to_string());
        Ok(())
    }
}

/// Drains the result channel in completion order.
pub struct ResultCollector<S> {
    sink: S,
    console: Arc<Console>,
}

impl<S: ResultSink> ResultCollector<S> {
    pub fn new(sink: S, console: Arc<Console>) -> Self {
        Self { sink, console }
    }

    /// Runs until every sender is gone and the buffer is empty.
    ///
    /// A sink failure does not stop the drain; the first one is returned once
    /// the channel is exhausted so no accepted name is lost from the terminal.
    pub async fn run(
        mut self,
        mut results: mpsc::UnboundedReceiver<String>,
    ) -> Result<Vec<String>, ScanError> {
        let mut accepted = Vec::new();
        let mut first_error = None;

        while let Some(bucket) = results.recv().await {
            self.console.accepted(&bucket);
            if let Err(err) = self.sink.append(&bucket) {
                engine_debug!("Failed to record bucket {}: {}", bucket, err);
                self.console.notice(&format!("failed to record {bucket}: {err}"));
                first_error.get_or_insert(err);
            }
            accepted.push(bucket);
        }

        engine_debug!("Result channel closed after {} accepted names", accepted.len());
        match first_error {
            Some(err) => Err(ScanError::Sink(err)),
            None => Ok(accepted),
        }
    }
}
