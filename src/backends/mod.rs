//! Backend implementations of the logger contract

pub mod structured;
pub mod writer;

pub use structured::{StructuredEntry, StructuredLogger};
pub use writer::{MemoryBuffer, SharedWriter};

use crate::core::{LogLevel, Logger, OutputFormat};

/// Create a backend logger writing `format` to `writer` at threshold `level`
///
/// ```
/// use rust_fanout_logger::prelude::*;
///
/// let (writer, buffer) = SharedWriter::memory();
/// let logger = new_logger(writer, LogLevel::Info, OutputFormat::Text);
/// logger.warn().add_int("retries", 3).flush("retry exhausted").unwrap();
/// assert!(buffer.contents().contains("retries=3"));
/// ```
pub fn new_logger(writer: SharedWriter, level: LogLevel, format: OutputFormat) -> Box<dyn Logger> {
    Box::new(StructuredLogger::new(writer, level, format))
}
