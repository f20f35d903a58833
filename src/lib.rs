//! # Rust Fanout Logger
//!
//! A structured-logging combinator: one [`FanoutLogger`] broadcasts every log
//! statement to any number of backend loggers, each with its own output
//! format, threshold and target.
//!
//! ## Features
//!
//! - **Fan-out**: Field additions and flushes are replayed on every child, in order
//! - **Structured backends**: JSON lines, human-readable text, and GELF 1.1
//! - **Termination signals**: Panic and fatal flushes return a [`Termination`]
//!   that the caller raises once, however many children asked for it
//! - **Isolation**: A child that unwinds while flushing does not stop the others
//!
//! ## Example
//!
//! ```
//! use rust_fanout_logger::prelude::*;
//!
//! let (console, _console_buf) = SharedWriter::memory();
//! let (graylog, graylog_buf) = SharedWriter::memory();
//!
//! let logger = FanoutLogger::builder()
//!     .child(new_logger(console, LogLevel::Info, OutputFormat::Text))
//!     .child(new_logger(graylog, LogLevel::Debug, OutputFormat::Gelf))
//!     .field("service", "billing")
//!     .build()
//!     .unwrap();
//!
//! logger.debug().add_str("cache", "miss").flush("lookup").unwrap();
//! assert!(graylog_buf.contents().contains("\"_cache\":\"miss\""));
//! ```

pub mod backends;
pub mod core;
pub mod fanout;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{new_logger, MemoryBuffer, SharedWriter, StructuredLogger};
    pub use crate::core::{
        enforce, BackendConfig, Entry, FanoutMetrics, FieldValue, FormatterConfig, LogContext,
        LogLevel, Logger, LoggerConfig, LoggerError, OutputFormat, Result, Target, Termination,
        TimestampFormat,
    };
    pub use crate::fanout::{FanoutBuilder, FanoutEntry, FanoutLogger};
}

pub use backends::{new_logger, MemoryBuffer, SharedWriter, StructuredEntry, StructuredLogger};
pub use core::{
    enforce, error_stack, BackendConfig, Entry, FanoutMetrics, FieldValue, FormatterConfig,
    LogContext, LogEntry, LogLevel, Logger, LoggerConfig, LoggerError, OutputFormat, Result,
    Target, Termination, TimestampFormat, FATAL_EXIT_CODE,
};
pub use fanout::{FanoutBuilder, FanoutEntry, FanoutLogger};
