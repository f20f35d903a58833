//! Structured backend logger
//!
//! One implementation of the [`Logger`] / [`Entry`] contract, parameterised by
//! an [`OutputFormat`]. Entries below the logger's threshold skip field
//! collection and write nothing, but a panic or fatal flush still returns
//! its termination directive.

use super::writer::SharedWriter;
use crate::core::{
    error_stack, Entry, FieldValue, FormatterConfig, LogContext, LogEntry, LogLevel, Logger,
    OutputFormat, Termination,
};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StructuredLogger {
    writer: SharedWriter,
    min_level: LogLevel,
    format: OutputFormat,
    config: Arc<FormatterConfig>,
    fields: Arc<Vec<(String, FieldValue)>>,
}

impl StructuredLogger {
    pub fn new(writer: SharedWriter, min_level: LogLevel, format: OutputFormat) -> Self {
        Self {
            writer,
            min_level,
            format,
            config: FormatterConfig::default().shared(),
            fields: Arc::new(Vec::new()),
        }
    }

    /// JSON lines logger
    pub fn json(writer: SharedWriter, min_level: LogLevel) -> Self {
        Self::new(writer, min_level, OutputFormat::Json)
    }

    /// Human-readable console logger
    pub fn text(writer: SharedWriter, min_level: LogLevel) -> Self {
        Self::new(writer, min_level, OutputFormat::Text)
    }

    /// GELF 1.1 logger
    pub fn gelf(writer: SharedWriter, min_level: LogLevel) -> Self {
        Self::new(writer, min_level, OutputFormat::Gelf)
    }

    #[must_use]
    pub fn with_config(mut self, config: FormatterConfig) -> Self {
        self.config = config.shared();
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Logger for StructuredLogger {
    fn with_field(&self, key: &str, value: &str) -> Box<dyn Logger> {
        let mut fields = self.fields.as_ref().clone();
        fields.push((key.to_string(), FieldValue::from(value)));
        Box::new(Self {
            fields: Arc::new(fields),
            ..self.clone()
        })
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.min_level.enables(level)
    }

    fn entry(&self, level: LogLevel) -> Box<dyn Entry> {
        let emit = self.enabled(level);
        let record = if emit {
            LogEntry::with_fields(level, &self.fields)
        } else {
            LogEntry::new(level)
        };
        Box::new(StructuredEntry {
            record,
            emit,
            writer: self.writer.clone(),
            format: self.format,
            config: Arc::clone(&self.config),
        })
    }
}

pub struct StructuredEntry {
    record: LogEntry,
    emit: bool,
    writer: SharedWriter,
    format: OutputFormat,
    config: Arc<FormatterConfig>,
}

impl StructuredEntry {
    fn push(mut self: Box<Self>, key: &str, value: FieldValue) -> Box<dyn Entry> {
        if self.emit {
            self.record.push(key, value);
        }
        self
    }
}

impl Entry for StructuredEntry {
    fn level(&self) -> LogLevel {
        self.record.level
    }

    fn add_fields(mut self: Box<Self>, fields: &LogContext) -> Box<dyn Entry> {
        if self.emit {
            for (key, value) in fields.fields() {
                self.record.push(key.clone(), value.clone());
            }
        }
        self
    }

    fn add_error(self: Box<Self>, key: &str, err: &(dyn Error + 'static)) -> Box<dyn Entry> {
        let stack_key = format!("{}_stack", key);
        self.push(key, FieldValue::String(err.to_string()))
            .add_str(&stack_key, &error_stack(err))
    }

    fn add_bool(self: Box<Self>, key: &str, val: bool) -> Box<dyn Entry> {
        self.push(key, FieldValue::Bool(val))
    }

    fn add_int(self: Box<Self>, key: &str, val: i64) -> Box<dyn Entry> {
        self.push(key, FieldValue::Int(val))
    }

    fn add_str(self: Box<Self>, key: &str, val: &str) -> Box<dyn Entry> {
        self.push(key, FieldValue::from(val))
    }

    fn add_time(self: Box<Self>, key: &str, val: DateTime<Utc>) -> Box<dyn Entry> {
        self.push(key, FieldValue::Time(val))
    }

    fn add_dur(self: Box<Self>, key: &str, val: Duration) -> Box<dyn Entry> {
        self.push(key, FieldValue::Duration(val))
    }

    fn add_any(self: Box<Self>, key: &str, val: serde_json::Value) -> Box<dyn Entry> {
        self.push(key, FieldValue::Any(val))
    }

    fn flush(mut self: Box<Self>, message: &str) -> Result<(), Termination> {
        if self.emit {
            self.record.set_message(message);
            let line = self.format.format(&self.record, &self.config);
            if let Err(e) = self.writer.write_line(&line) {
                eprintln!(
                    "[LOGGER ERROR] {} backend failed to write to {}: {}",
                    self.format.name(),
                    self.writer.name(),
                    e
                );
            }
        }

        match Termination::for_level(self.record.level, message) {
            Some(termination) => Err(termination),
            None => Ok(()),
        }
    }
}
