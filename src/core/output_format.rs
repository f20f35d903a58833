//! Output format configuration for log entries
//!
//! Provides the wire layouts a backend can render an entry in:
//! - Json: single-line JSON object, one per entry
//! - Text: human-readable console line
//! - Gelf: Graylog Extended Log Format 1.1

use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use super::timestamp::{FormatterConfig, TimestampFormat};
use serde::{Deserialize, Serialize};

/// GELF version written into every message
pub const GELF_VERSION: &str = "1.1";

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format for machine processing (default)
    ///
    /// Example: `{"level":"info","message":"Request processed","time":"2025-01-08T10:30:45.123Z"}`
    #[default]
    Json,

    /// Human-readable text format
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] Request processed user=alice`
    Text,

    /// GELF 1.1 format, user fields prefixed with `_`
    ///
    /// Example: `{"_user":"alice","level":6,"short_message":"Request processed","timestamp":1736332245.123,"version":"1.1"}`
    Gelf,
}

impl OutputFormat {
    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Gelf => "gelf",
        }
    }

    /// Format a log entry according to this output format
    pub fn format(&self, entry: &LogEntry, config: &FormatterConfig) -> String {
        match self {
            OutputFormat::Json => self.format_json(entry, &config.timestamp_format),
            OutputFormat::Text => self.format_text(entry, config),
            OutputFormat::Gelf => self.format_gelf(entry, config.host.as_deref()),
        }
    }

    /// Format as JSON
    fn format_json(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        // Later duplicates overwrite earlier ones
        for (key, value) in &entry.fields {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        // Reserved keys go in after the fields so a field cannot shadow them
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.as_lowercase().to_string()),
        );
        json_obj.insert(
            "time".to_string(),
            self.format_timestamp_json(entry, timestamp_format),
        );

        if !entry.message.is_empty() {
            json_obj.insert(
                "message".to_string(),
                serde_json::Value::String(entry.message.clone()),
            );
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format timestamp for JSON output
    fn format_timestamp_json(
        &self,
        entry: &LogEntry,
        timestamp_format: &TimestampFormat,
    ) -> serde_json::Value {
        match timestamp_format.numeric(&entry.timestamp) {
            Some(n) => serde_json::Value::Number(n.into()),
            None => serde_json::Value::String(timestamp_format.format(&entry.timestamp)),
        }
    }

    /// Format as human-readable text, optionally colored
    fn format_text(&self, entry: &LogEntry, config: &FormatterConfig) -> String {
        let timestamp_str = config.timestamp_format.format(&entry.timestamp);
        let level_str = format!("{:5}", entry.level.to_str());

        #[cfg(feature = "console")]
        let level_str = if config.use_colors {
            use colored::Colorize;
            level_str.color(entry.level.color_code()).to_string()
        } else {
            level_str
        };

        let mut line = format!("[{}] [{}] {}", timestamp_str, level_str, entry.message);

        for (key, value) in &entry.fields {
            let formatted_value = match value {
                FieldValue::String(s) => self.escape_text_value(s),
                other => self.escape_text_value(&other.to_string()),
            };
            line.push(' ');
            line.push_str(&LogEntry::sanitize_message(key));
            line.push('=');
            line.push_str(&formatted_value);
        }

        line
    }

    /// Format as GELF 1.1
    fn format_gelf(&self, entry: &LogEntry, host: Option<&str>) -> String {
        let mut json_obj = serde_json::Map::new();

        for (key, value) in &entry.fields {
            json_obj.insert(gelf_field_name(key), value.to_json_value());
        }

        json_obj.insert(
            "version".to_string(),
            serde_json::Value::String(GELF_VERSION.to_string()),
        );
        if let Some(host) = host {
            json_obj.insert("host".to_string(), serde_json::Value::String(host.to_string()));
        }
        json_obj.insert(
            "short_message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );
        let seconds = entry.timestamp.timestamp_millis() as f64 / 1000.0;
        json_obj.insert(
            "timestamp".to_string(),
            serde_json::Number::from_f64(seconds)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::Number(entry.level.code().into()),
        );

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Quote a text value if it contains whitespace, quotes or `=`
    fn escape_text_value(&self, value: &str) -> String {
        if value.is_empty() || value.contains([' ', '"', '=', '\n', '\r', '\t']) {
            format!(
                "\"{}\"",
                value
                    .replace('\\', "\\\\")
                    .replace('"', "\\\"")
                    .replace('\n', "\\n")
                    .replace('\r', "\\r")
                    .replace('\t', "\\t")
            )
        } else {
            value.to_string()
        }
    }
}

/// GELF additional field name for `key`
///
/// GELF 1.1 forbids the additional field `_id`, so a field named `id` is
/// written as `_id_`.
fn gelf_field_name(key: &str) -> String {
    if key == "id" {
        "_id_".to_string()
    } else {
        format!("_{}", key)
    }
}
