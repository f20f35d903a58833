//! The logger capability contract
//!
//! A [`Logger`] produces [`Entry`] builders at a chosen level and carries
//! persistent fields. An entry accumulates typed fields and is terminated
//! exactly once by [`Entry::flush`]. Every builder method consumes the entry
//! and hands back its replacement, so an entry can never be used after it
//! has been flushed:
//!
//! ```compile_fail
//! use rust_fanout_logger::prelude::*;
//!
//! let (writer, _buffer) = SharedWriter::memory();
//! let logger = new_logger(writer, LogLevel::Debug, OutputFormat::Json);
//! let entry = logger.info();
//! let _ = entry.flush("once");
//! let _ = entry.flush("twice"); // entry was moved by the first flush
//! ```

use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::termination::Termination;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::time::Duration;

/// Capability object that creates entries and carries persistent fields
pub trait Logger: Send + Sync {
    /// Return a new logger that adds `key` to every entry it creates
    ///
    /// `self` is left untouched.
    fn with_field(&self, key: &str, value: &str) -> Box<dyn Logger>;

    /// Whether an entry at `level` would produce output
    fn enabled(&self, level: LogLevel) -> bool;

    /// Create an entry at a known-valid level
    fn entry(&self, level: LogLevel) -> Box<dyn Entry>;

    /// Create an entry from a numeric level code
    ///
    /// Codes that do not name a level fall back to `Info`.
    fn level(&self, code: i32) -> Box<dyn Entry> {
        self.entry(LogLevel::resolve(code))
    }

    fn debug(&self) -> Box<dyn Entry> {
        self.entry(LogLevel::Debug)
    }

    fn info(&self) -> Box<dyn Entry> {
        self.entry(LogLevel::Info)
    }

    fn warn(&self) -> Box<dyn Entry> {
        self.entry(LogLevel::Warn)
    }

    fn error(&self) -> Box<dyn Entry> {
        self.entry(LogLevel::Error)
    }

    /// Create a fatal entry. Flushing it returns [`Termination::Exit`].
    fn fatal(&self) -> Box<dyn Entry> {
        self.entry(LogLevel::Fatal)
    }

    /// Create a panic entry. Flushing it returns [`Termination::Panic`].
    fn panic(&self) -> Box<dyn Entry> {
        self.entry(LogLevel::Panic)
    }
}

/// Single-use builder for one log statement
pub trait Entry: Send {
    /// Level the entry was created at
    fn level(&self) -> LogLevel;

    fn add_fields(self: Box<Self>, fields: &LogContext) -> Box<dyn Entry>;

    /// Add an error under `err`, with its stack text under `err_stack`
    fn add_err(self: Box<Self>, err: &(dyn Error + 'static)) -> Box<dyn Entry> {
        self.add_error("err", err)
    }

    /// Add an error under `key`, with its stack text under `{key}_stack`
    fn add_error(self: Box<Self>, key: &str, err: &(dyn Error + 'static)) -> Box<dyn Entry>;

    fn add_bool(self: Box<Self>, key: &str, val: bool) -> Box<dyn Entry>;

    fn add_int(self: Box<Self>, key: &str, val: i64) -> Box<dyn Entry>;

    fn add_str(self: Box<Self>, key: &str, val: &str) -> Box<dyn Entry>;

    fn add_time(self: Box<Self>, key: &str, val: DateTime<Utc>) -> Box<dyn Entry>;

    fn add_dur(self: Box<Self>, key: &str, val: Duration) -> Box<dyn Entry>;

    fn add_any(self: Box<Self>, key: &str, val: serde_json::Value) -> Box<dyn Entry>;

    /// Write the entry out with an optional message (empty string for none)
    ///
    /// Returns the termination a panic or fatal level requests; the caller
    /// decides whether to act on it.
    fn flush(self: Box<Self>, message: &str) -> Result<(), Termination>;
}
