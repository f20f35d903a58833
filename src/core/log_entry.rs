//! Log entry structure
//!
//! `LogEntry` is the record a backend accumulates between entry creation and
//! flush. Fields keep insertion order; adding a key twice keeps both, and the
//! output format decides how duplicates are rendered.

use super::log_context::FieldValue;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub fields: Vec<(String, FieldValue)>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    pub(crate) fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            message: String::new(),
            timestamp: Utc::now(),
            fields: Vec::new(),
        }
    }

    /// Start from a set of persistent fields
    pub fn with_fields(level: LogLevel, fields: &[(String, FieldValue)]) -> Self {
        let mut entry = Self::new(level);
        entry.fields.extend_from_slice(fields);
        entry
    }

    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push((key.into(), value.into()));
    }

    /// Set the final message, sanitized
    pub fn set_message(&mut self, message: &str) {
        self.message = Self::sanitize_message(message);
    }
}
