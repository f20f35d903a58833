//! Integration tests for the fan-out logger
//!
//! These tests verify:
//! - Broadcasting to real backends in several formats
//! - Per-child level filtering
//! - Panic aggregation and fatal passthrough
//! - Persistent fields and error chains
//! - Configuration-driven construction with file targets
//! - Log injection prevention

use rust_fanout_logger::prelude::*;
use rust_fanout_logger::FATAL_EXIT_CODE;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn memory_backends(levels: &[(LogLevel, OutputFormat)]) -> (FanoutLogger, Vec<MemoryBuffer>) {
    let mut buffers = Vec::new();
    let mut children = Vec::new();
    for (level, format) in levels {
        let (writer, buffer) = SharedWriter::memory();
        children.push(new_logger(writer, *level, *format));
        buffers.push(buffer);
    }
    (FanoutLogger::new(children), buffers)
}

fn parse(line: &str) -> serde_json::Value {
    serde_json::from_str(line).expect("line is not valid JSON")
}

#[test]
fn test_warn_reaches_every_backend() {
    let (logger, buffers) = memory_backends(&[
        (LogLevel::Debug, OutputFormat::Json),
        (LogLevel::Debug, OutputFormat::Text),
        (LogLevel::Debug, OutputFormat::Gelf),
    ]);

    logger.warn().add_int("retries", 3).flush("retry exhausted").unwrap();

    let json = parse(&buffers[0].contents());
    assert_eq!(json["level"], "warn");
    assert_eq!(json["retries"], 3);
    assert_eq!(json["message"], "retry exhausted");

    let text = buffers[1].contents();
    assert!(text.contains("WARN"));
    assert!(text.contains("retry exhausted retries=3"));

    let gelf = parse(&buffers[2].contents());
    assert_eq!(gelf["version"], "1.1");
    assert_eq!(gelf["short_message"], "retry exhausted");
    assert_eq!(gelf["_retries"], 3);
    assert_eq!(gelf["level"], 4);
}

#[test]
fn test_panic_flushes_all_backends_then_signals_once() {
    let (logger, buffers) = memory_backends(&[
        (LogLevel::Debug, OutputFormat::Json),
        (LogLevel::Debug, OutputFormat::Json),
    ]);

    let result = logger.panic().add_str("reason", "x").flush("boom");

    assert_eq!(result, Err(Termination::panic("boom")));
    for buffer in &buffers {
        let line = parse(&buffer.contents());
        assert_eq!(line["reason"], "x");
        assert_eq!(line["message"], "boom");
        assert_eq!(line["level"], "panic");
    }
    assert_eq!(logger.metrics().panic_signals(), 2);
    assert_eq!(logger.metrics().panics_raised(), 1);
}

#[test]
fn test_fatal_returns_exit_directive() {
    let (logger, buffers) = memory_backends(&[(LogLevel::Info, OutputFormat::Json)]);

    let result = logger.fatal().flush("cannot continue");

    assert_eq!(result, Err(Termination::exit(FATAL_EXIT_CODE)));
    assert_eq!(parse(&buffers[0].contents())["level"], "fatal");
}

#[test]
fn test_child_threshold_filters_independently() {
    let (logger, buffers) = memory_backends(&[
        (LogLevel::Debug, OutputFormat::Json),
        (LogLevel::Error, OutputFormat::Json),
    ]);

    logger.info().add_bool("cached", true).flush("lookup").unwrap();
    logger.error().flush("failed").unwrap();

    assert_eq!(buffers[0].lines().len(), 2);
    let quiet = buffers[1].lines();
    assert_eq!(quiet.len(), 1);
    assert_eq!(parse(&quiet[0])["message"], "failed");

    assert!(logger.enabled(LogLevel::Debug));
}

#[test]
fn test_debug_entry_below_error_threshold_writes_nothing() {
    let (logger, buffers) = memory_backends(&[
        (LogLevel::Error, OutputFormat::Json),
        (LogLevel::Error, OutputFormat::Text),
        (LogLevel::Error, OutputFormat::Gelf),
    ]);

    let result = logger.debug().add_str("secret", "x").flush("hidden");

    assert_eq!(result, Ok(()));
    assert!(!logger.enabled(LogLevel::Debug));
    for buffer in &buffers {
        assert!(buffer.is_empty());
    }
}

#[test]
fn test_add_field_and_with_field() {
    let (mut logger, buffers) = memory_backends(&[
        (LogLevel::Debug, OutputFormat::Json),
        (LogLevel::Debug, OutputFormat::Gelf),
    ]);
    logger.add_field("service", "billing");
    let request_logger = logger.with_field("request_id", "r-42");

    logger.info().flush("startup").unwrap();
    request_logger.info().flush("handled").unwrap();

    let json = buffers[0].lines();
    assert_eq!(parse(&json[0])["service"], "billing");
    assert!(parse(&json[0]).get("request_id").is_none());
    assert_eq!(parse(&json[1])["service"], "billing");
    assert_eq!(parse(&json[1])["request_id"], "r-42");

    let gelf = buffers[1].lines();
    assert_eq!(parse(&gelf[1])["_request_id"], "r-42");
}

#[derive(Debug, thiserror::Error)]
#[error("payment declined")]
struct PaymentError {
    #[source]
    source: std::io::Error,
}

#[test]
fn test_add_err_writes_error_and_chain() {
    let (logger, buffers) = memory_backends(&[(LogLevel::Debug, OutputFormat::Json)]);
    let err = PaymentError {
        source: std::io::Error::new(std::io::ErrorKind::TimedOut, "gateway timeout"),
    };

    logger.error().add_err(&err).flush("charge failed").unwrap();

    let line = parse(&buffers[0].contents());
    assert_eq!(line["err"], "payment declined");
    assert_eq!(line["err_stack"], "payment declined\ncaused by: gateway timeout");
}

#[test]
fn test_typed_fields_render_per_format() {
    let (logger, buffers) = memory_backends(&[
        (LogLevel::Debug, OutputFormat::Json),
        (LogLevel::Debug, OutputFormat::Text),
    ]);
    let context: LogContext = vec![("region", "eu"), ("tier", "gold")].into_iter().collect();

    logger
        .info()
        .add_fields(&context)
        .add_dur("elapsed", Duration::from_millis(1500))
        .add_any("ids", serde_json::json!([1, 2]))
        .flush("batch done")
        .unwrap();

    let json = parse(&buffers[0].contents());
    assert_eq!(json["region"], "eu");
    assert_eq!(json["tier"], "gold");
    assert_eq!(json["elapsed"], 1500.0);
    assert_eq!(json["ids"], serde_json::json!([1, 2]));

    let text = buffers[1].contents();
    assert!(text.contains("region=eu tier=gold"));
    assert!(text.contains("elapsed=1.5s"));
}

#[test]
fn test_nested_fanout_writes_every_leaf() {
    let (inner, inner_buffers) = memory_backends(&[
        (LogLevel::Debug, OutputFormat::Json),
        (LogLevel::Debug, OutputFormat::Json),
    ]);
    let (writer, outer_buffer) = SharedWriter::memory();
    let outer = FanoutLogger::new(vec![
        Box::new(inner),
        new_logger(writer, LogLevel::Debug, OutputFormat::Json),
    ]);

    let result = outer.panic().flush("boom");

    assert_eq!(result, Err(Termination::panic("boom")));
    assert_eq!(inner_buffers[0].lines().len(), 1);
    assert_eq!(inner_buffers[1].lines().len(), 1);
    assert_eq!(outer_buffer.lines().len(), 1);
}

#[test]
fn test_config_with_file_targets() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let json_path = temp_dir.path().join("app.jsonl");
    let gelf_path = temp_dir.path().join("app.gelf");

    let config = LoggerConfig::from_json(&format!(
        r#"{{
            "fields": {{"service": "billing"}},
            "backends": [
                {{"format": "json", "level": "debug",
                  "target": {{"type": "file", "path": {}}}}},
                {{"format": "gelf", "level": "warn", "host": "web-1",
                  "target": {{"type": "file", "path": {}}}}}
            ]
        }}"#,
        serde_json::to_string(&json_path).unwrap(),
        serde_json::to_string(&gelf_path).unwrap(),
    ))
    .expect("Failed to parse config");

    let logger = config.build().expect("Failed to build logger");
    logger.info().flush("started").unwrap();
    logger.warn().add_int("retries", 3).flush("slow").unwrap();

    let json = fs::read_to_string(&json_path).expect("Failed to read json log");
    let lines: Vec<&str> = json.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(parse(lines[0])["service"], "billing");

    let gelf = fs::read_to_string(&gelf_path).expect("Failed to read gelf log");
    let lines: Vec<&str> = gelf.lines().collect();
    assert_eq!(lines.len(), 1);
    let line = parse(lines[0]);
    assert_eq!(line["host"], "web-1");
    assert_eq!(line["_service"], "billing");
    assert_eq!(line["_retries"], 3);
}

#[test]
fn test_log_injection_prevention() {
    let (logger, buffers) = memory_backends(&[(LogLevel::Info, OutputFormat::Text)]);

    let malicious_message = "User login\nERROR [2024-10-17] Fake error injected\nINFO Continuation";
    logger.info().flush(malicious_message).unwrap();

    let content = buffers[0].contents();
    assert!(content.contains("\\n"));
    assert_eq!(content.lines().count(), 1, "Log should be a single line");
}

#[test]
fn test_enforce_passes_through_ok() {
    let (logger, buffers) = memory_backends(&[(LogLevel::Info, OutputFormat::Json)]);
    enforce(logger.info().flush("fine"));
    assert_eq!(buffers[0].lines().len(), 1);
}

#[test]
#[should_panic(expected = "logger called at panic level with message: boom")]
fn test_enforce_raises_aggregated_panic() {
    let (logger, _buffers) = memory_backends(&[
        (LogLevel::Debug, OutputFormat::Json),
        (LogLevel::Debug, OutputFormat::Json),
    ]);
    enforce(logger.panic().flush("boom"));
}
