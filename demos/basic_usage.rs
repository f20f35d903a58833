//! Basic fan-out logger usage example
//!
//! Demonstrates broadcasting to a colored console backend and a JSON file
//! backend, persistent fields, error chains and panic aggregation.
//!
//! Run with: cargo run --example basic_usage

use rust_fanout_logger::prelude::*;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("payment declined")]
struct PaymentError {
    #[source]
    source: std::io::Error,
}

fn main() -> Result<()> {
    println!("=== Rust Fanout Logger - Basic Usage Example ===\n");

    let log_path = std::env::temp_dir().join("rust_fanout_logger_demo.jsonl");

    let mut logger = FanoutLogger::builder()
        .backend(BackendConfig::new(OutputFormat::Text, LogLevel::Debug, Target::Stdout))
        .backend(BackendConfig::new(
            OutputFormat::Json,
            LogLevel::Info,
            Target::File {
                path: log_path.clone(),
            },
        ))
        .build()?;

    println!("1. Logging at different levels:");
    enforce(logger.debug().flush("This is a debug message (console only)"));
    enforce(logger.info().flush("This is an info message"));
    enforce(logger.warn().add_int("retries", 3).flush("retry exhausted"));

    println!("\n2. Persistent fields:");
    logger.add_field("service", "billing");
    let request_logger = logger.with_field("request_id", "r-42");
    enforce(
        request_logger
            .info()
            .add_dur("elapsed", Duration::from_millis(37))
            .flush("request handled"),
    );

    println!("\n3. Errors with their cause chain:");
    let err = PaymentError {
        source: std::io::Error::new(std::io::ErrorKind::TimedOut, "gateway timeout"),
    };
    enforce(logger.error().add_err(&err).flush("charge failed"));

    println!("\n4. Panic aggregation:");
    match logger.panic().add_str("reason", "x").flush("boom") {
        Err(termination) => println!("   both backends flushed, one signal: {}", termination),
        Ok(()) => println!("   no signal"),
    }

    let metrics = logger.metrics();
    println!(
        "\n   entries: {}, child flushes: {}, panics raised: {}",
        metrics.entries_flushed(),
        metrics.child_flushes(),
        metrics.panics_raised()
    );

    println!("\nJSON records written to {}", log_path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
