//! Logging macros for ergonomic log message formatting.
//!
//! Each macro creates an entry, flushes it with a `format!`-style message and
//! enforces the result, so a panic-level statement unwinds and a fatal one
//! exits the process.
//!
//! # Examples
//!
//! ```
//! use rust_fanout_logger::prelude::*;
//! use rust_fanout_logger::info;
//!
//! let (writer, buffer) = SharedWriter::memory();
//! let logger = new_logger(writer, LogLevel::Info, OutputFormat::Text);
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! assert!(buffer.contents().contains("Server listening on port 8080"));
//! ```

/// Flush a formatted message at `level` and enforce the result.
///
/// # Examples
///
/// ```
/// # use rust_fanout_logger::prelude::*;
/// # let (writer, _buffer) = SharedWriter::memory();
/// # let logger = new_logger(writer, LogLevel::Debug, OutputFormat::Json);
/// use rust_fanout_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::enforce($logger.entry($level).flush(&format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at fatal level, then exit the process with code 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log at panic level, then unwind.
///
/// ```should_panic
/// # use rust_fanout_logger::prelude::*;
/// # let (writer, _buffer) = SharedWriter::memory();
/// # let logger = new_logger(writer, LogLevel::Debug, OutputFormat::Json);
/// use rust_fanout_logger::panic_log;
/// panic_log!(logger, "invariant broken: {}", "negative balance");
/// ```
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Panic, $($arg)+)
    };
}
