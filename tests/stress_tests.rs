//! Stress tests for concurrent fan-out logging
//!
//! These tests verify:
//! - Records from many threads reach every backend, whole and in one line each
//! - Panic signals stay aggregated per entry under contention
//! - Derived loggers share backends and metrics safely

use rust_fanout_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

#[test]
fn test_concurrent_flushes_reach_every_backend() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.jsonl");

    let (writer, buffer) = SharedWriter::memory();
    let logger = FanoutLogger::builder()
        .child(new_logger(writer, LogLevel::Debug, OutputFormat::Text))
        .backend(BackendConfig::new(
            OutputFormat::Json,
            LogLevel::Debug,
            Target::File {
                path: log_file.clone(),
            },
        ))
        .build()
        .expect("Failed to build logger");
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger
                        .info()
                        .add_int("thread", t as i64)
                        .add_int("seq", i as i64)
                        .flush("tick")
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(buffer.lines().len(), THREADS * PER_THREAD);

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let mut seen = 0;
    for line in content.lines() {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("torn JSON line");
        assert_eq!(parsed["message"], "tick");
        seen += 1;
    }
    assert_eq!(seen, THREADS * PER_THREAD);
    assert_eq!(logger.metrics().entries_flushed(), (THREADS * PER_THREAD) as u64);
    assert_eq!(logger.metrics().child_flushes(), (THREADS * PER_THREAD * 2) as u64);
}

#[test]
fn test_concurrent_panic_signals_stay_aggregated() {
    let mut children = Vec::new();
    let mut buffers = Vec::new();
    for _ in 0..3 {
        let (writer, buffer) = SharedWriter::memory();
        children.push(new_logger(writer, LogLevel::Debug, OutputFormat::Json));
        buffers.push(buffer);
    }
    let logger = Arc::new(FanoutLogger::new(children));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    let result = logger.panic().flush("boom");
                    assert_eq!(result, Err(Termination::panic("boom")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let total = (THREADS * PER_THREAD) as u64;
    assert_eq!(logger.metrics().panics_raised(), total);
    assert_eq!(logger.metrics().panic_signals(), total * 3);
    for buffer in &buffers {
        assert_eq!(buffer.lines().len(), THREADS * PER_THREAD);
    }
}

#[test]
fn test_derived_loggers_across_threads() {
    let (writer, buffer) = SharedWriter::memory();
    let mut root = FanoutLogger::new(vec![new_logger(writer, LogLevel::Info, OutputFormat::Json)]);
    root.add_field("service", "billing");
    let root = Arc::new(root);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let worker = root.with_field("worker", &t.to_string());
                for _ in 0..PER_THREAD {
                    worker.info().flush("job").unwrap();
                    worker.debug().flush("filtered").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in &lines {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed["service"], "billing");
        assert!(parsed["worker"].is_string());
    }
    assert_eq!(root.metrics().entries_flushed(), (THREADS * PER_THREAD * 2) as u64);
}
