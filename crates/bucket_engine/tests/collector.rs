mod common;

use std::fs;
use std::io;

use bucket_engine::{FileSink, ResultCollector, ResultSink, ScanError};
use common::captured_console;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokio::sync::mpsc;

struct FlakySink {
    written: Vec<String>,
    reject: &'static str,
}

impl ResultSink for FlakySink {
    fn append(&mut self, bucket: &str) -> io::Result<()> {
        if bucket == self.reject {
            return Err(io::Error::other("disk full"));
        }
        self.written.push(bucket.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn drains_every_name_until_senders_are_gone() {
    let (console, buffer) = captured_console();
    let (tx, rx) = mpsc::unbounded_channel();
    let worker_tx = tx.clone();

    tx.send("alpha".to_string()).unwrap();
    worker_tx.send("beta".to_string()).unwrap();
    drop(worker_tx);
    tx.send("gamma".to_string()).unwrap();
    drop(tx);

    let accepted = ResultCollector::new(Vec::<String>::new(), console).run(rx).await.unwrap();
    assert_eq!(accepted, vec!["alpha", "beta", "gamma"]);

    let printed = buffer.contents();
    assert!(printed.contains("[+] alpha"));
    assert!(printed.contains("[+] gamma"));
}

#[tokio::test]
async fn file_sink_appends_one_name_per_line() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("found.txt");
    let (console, _) = captured_console();
    let (tx, rx) = mpsc::unbounded_channel();

    let collector = tokio::spawn(
        ResultCollector::new(FileSink::create(&output).unwrap(), console).run(rx),
    );
    tx.send("first".to_string()).unwrap();
    tx.send("second".to_string()).unwrap();
    drop(tx);
    collector.await.unwrap().unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "first\nsecond\n");
}

#[test]
fn file_sink_reports_unwritable_path() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("missing-dir").join("found.txt");
    assert!(matches!(
        FileSink::create(&output),
        Err(ScanError::Output { .. })
    ));
}

#[tokio::test]
async fn sink_failure_is_reported_after_full_drain() {
    let (console, buffer) = captured_console();
    let (tx, rx) = mpsc::unbounded_channel();
    for name in ["one", "two", "three"] {
        tx.send(name.to_string()).unwrap();
    }
    drop(tx);

    let sink = FlakySink {
        written: Vec::new(),
        reject: "two",
    };
    let result = ResultCollector::new(sink, console).run(rx).await;

    assert!(matches!(result, Err(ScanError::Sink(_))));
    assert!(buffer.contents().contains("[+] three"));
}
