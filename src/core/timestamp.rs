//! Timestamp formats and formatter configuration
//!
//! `TimestampFormat` controls how the JSON and text formats render the entry
//! time. The GELF format always uses fractional unix seconds.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Arc;

const ISO8601_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Timestamp rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix seconds, written as a JSON number by the JSON format
    Unix,
    UnixMillis,
    UnixMicros,

    /// strftime pattern, e.g. `Custom("%Y-%m-%d".into())`
    Custom(String),
}

impl TimestampFormat {
    /// Render `at`; a pattern chrono cannot render falls back to `Iso8601`
    #[must_use]
    pub fn format(&self, at: &DateTime<Utc>) -> String {
        if let Some(n) = self.numeric(at) {
            return n.to_string();
        }
        let pattern = match self {
            TimestampFormat::Iso8601Micros => "%Y-%m-%dT%H:%M:%S%.6fZ",
            TimestampFormat::Custom(pattern) => pattern.as_str(),
            TimestampFormat::Rfc3339 => return at.to_rfc3339(),
            _ => ISO8601_PATTERN,
        };

        let mut out = String::new();
        if write!(out, "{}", at.format(pattern)).is_err() {
            out.clear();
            let _ = write!(out, "{}", at.format(ISO8601_PATTERN));
        }
        out
    }

    /// The unix value for the numeric formats, `None` for the textual ones
    ///
    /// The JSON format writes `Some` as a number instead of a string.
    #[must_use]
    pub fn numeric(&self, at: &DateTime<Utc>) -> Option<i64> {
        match self {
            TimestampFormat::Unix => Some(at.timestamp()),
            TimestampFormat::UnixMillis => Some(at.timestamp_millis()),
            TimestampFormat::UnixMicros => Some(at.timestamp_micros()),
            _ => None,
        }
    }

    /// Whether every specifier of a `Custom` pattern is one chrono knows
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(pattern) => {
                !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }
}

/// Options a backend hands to its [`OutputFormat`](super::OutputFormat)
///
/// Shared through `Arc` by every logger derived with `with_field`.
///
/// ```
/// use rust_fanout_logger::core::{FormatterConfig, TimestampFormat};
///
/// let config = FormatterConfig::new()
///     .with_timestamp_format(TimestampFormat::UnixMillis)
///     .with_host("web-1");
/// assert!(config.use_colors);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FormatterConfig {
    pub timestamp_format: TimestampFormat,
    /// Color the level in text output (needs the `console` feature)
    pub use_colors: bool,
    /// `host` written by the GELF format; omitted when `None`
    pub host: Option<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            use_colors: true,
            host: None,
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
