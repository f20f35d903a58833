//! Core logger types and traits

pub mod config;
pub mod error;
pub mod error_stack;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod termination;
pub mod timestamp;

pub use config::{BackendConfig, LoggerConfig, Target};
pub use error::{LoggerError, Result};
pub use error_stack::error_stack;
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Entry, Logger};
pub use metrics::FanoutMetrics;
pub use output_format::{OutputFormat, GELF_VERSION};
pub use termination::{enforce, Termination, FATAL_EXIT_CODE};
pub use timestamp::{FormatterConfig, TimestampFormat};
