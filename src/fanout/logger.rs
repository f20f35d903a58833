//! Fan-out logger: broadcasts every logger operation to its children

use super::builder::FanoutBuilder;
use super::entry::FanoutEntry;
use crate::core::{Entry, FanoutMetrics, LogLevel, Logger};
use std::sync::Arc;

/// Logger that forwards every call to an ordered list of child loggers
///
/// The fan-out logger is itself a [`Logger`], so it can be nested inside
/// another fan-out logger.
///
/// # Example
///
/// ```
/// use rust_fanout_logger::prelude::*;
///
/// let (json_writer, json) = SharedWriter::memory();
/// let (gelf_writer, gelf) = SharedWriter::memory();
///
/// let mut logger = FanoutLogger::new(vec![
///     new_logger(json_writer, LogLevel::Debug, OutputFormat::Json),
///     new_logger(gelf_writer, LogLevel::Debug, OutputFormat::Gelf),
/// ]);
/// logger.add_field("service", "billing");
///
/// logger.warn().add_int("retries", 3).flush("retry exhausted").unwrap();
///
/// assert!(json.contents().contains("\"retries\":3"));
/// assert!(gelf.contents().contains("\"_retries\":3"));
/// ```
pub struct FanoutLogger {
    children: Vec<Box<dyn Logger>>,
    metrics: Arc<FanoutMetrics>,
}

impl FanoutLogger {
    pub fn new(children: Vec<Box<dyn Logger>>) -> Self {
        Self {
            children,
            metrics: Arc::new(FanoutMetrics::new()),
        }
    }

    #[must_use]
    pub fn builder() -> FanoutBuilder {
        FanoutBuilder::new()
    }

    /// Append a child; entries created afterwards include it
    pub fn push(&mut self, child: Box<dyn Logger>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Attach a persistent field to every child, in place
    ///
    /// Each child is replaced by the logger its own `with_field` returns.
    pub fn add_field(&mut self, key: &str, value: &str) -> &mut Self {
        for child in self.children.iter_mut() {
            *child = child.with_field(key, value);
        }
        self
    }

    /// Counters shared with every entry this logger creates
    pub fn metrics(&self) -> &FanoutMetrics {
        &self.metrics
    }

    fn fan_out<F>(&self, level: LogLevel, create: F) -> Box<dyn Entry>
    where
        F: Fn(&dyn Logger) -> Box<dyn Entry>,
    {
        let entries = self
            .children
            .iter()
            .map(|child| create(child.as_ref()))
            .collect();
        Box::new(FanoutEntry::new(level, entries, Arc::clone(&self.metrics)))
    }
}

impl Default for FanoutLogger {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Logger for FanoutLogger {
    fn with_field(&self, key: &str, value: &str) -> Box<dyn Logger> {
        let children = self
            .children
            .iter()
            .map(|child| child.with_field(key, value))
            .collect();
        Box::new(FanoutLogger {
            children,
            metrics: Arc::clone(&self.metrics),
        })
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.children.iter().any(|child| child.enabled(level))
    }

    fn entry(&self, level: LogLevel) -> Box<dyn Entry> {
        self.fan_out(level, |child| child.entry(level))
    }

    fn level(&self, code: i32) -> Box<dyn Entry> {
        self.fan_out(LogLevel::resolve(code), |child| child.level(code))
    }

    fn debug(&self) -> Box<dyn Entry> {
        self.fan_out(LogLevel::Debug, |child| child.debug())
    }

    fn info(&self) -> Box<dyn Entry> {
        self.fan_out(LogLevel::Info, |child| child.info())
    }

    fn warn(&self) -> Box<dyn Entry> {
        self.fan_out(LogLevel::Warn, |child| child.warn())
    }

    fn error(&self) -> Box<dyn Entry> {
        self.fan_out(LogLevel::Error, |child| child.error())
    }

    fn fatal(&self) -> Box<dyn Entry> {
        self.fan_out(LogLevel::Fatal, |child| child.fatal())
    }

    fn panic(&self) -> Box<dyn Entry> {
        self.fan_out(LogLevel::Panic, |child| child.panic())
    }
}
