//! Builder for fan-out loggers

use super::logger::FanoutLogger;
use crate::backends::{SharedWriter, StructuredLogger};
use crate::core::{BackendConfig, Logger, LoggerConfig, LoggerError, Result, Target};

/// Collects children, backend configurations and persistent fields
///
/// Children added with [`child`](Self::child) keep their position; backends
/// from configuration are opened by [`build`](Self::build) and appended after
/// them in the order they were given.
///
/// # Example
///
/// ```
/// use rust_fanout_logger::prelude::*;
///
/// let (writer, buffer) = SharedWriter::memory();
/// let logger = FanoutLogger::builder()
///     .child(new_logger(writer, LogLevel::Info, OutputFormat::Json))
///     .backend(BackendConfig::new(OutputFormat::Text, LogLevel::Error, Target::Stderr))
///     .field("service", "billing")
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.len(), 2);
/// logger.info().flush("ready").unwrap();
/// assert!(buffer.contents().contains("\"service\":\"billing\""));
/// ```
pub struct FanoutBuilder {
    children: Vec<Box<dyn Logger>>,
    backends: Vec<BackendConfig>,
    fields: Vec<(String, String)>,
}

impl FanoutBuilder {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            backends: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add an already constructed child logger
    #[must_use = "builder methods return a new value"]
    pub fn child(mut self, child: Box<dyn Logger>) -> Self {
        self.children.push(child);
        self
    }

    /// Add a backend opened at build time
    #[must_use = "builder methods return a new value"]
    pub fn backend(mut self, backend: BackendConfig) -> Self {
        self.backends.push(backend);
        self
    }

    /// Add a persistent field to every child
    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Take backends and global fields from a configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.backends.extend(config.backends);
        self.fields.extend(config.fields);
        self
    }

    /// Open every configured backend and assemble the fan-out logger
    ///
    /// Fails on the first invalid backend or unopenable target; nothing is
    /// returned half built.
    pub fn build(self) -> Result<FanoutLogger> {
        if self.fields.iter().any(|(key, _)| key.is_empty()) {
            return Err(LoggerError::config("fields", "field keys must not be empty"));
        }

        let mut logger = FanoutLogger::new(self.children);
        for backend in &self.backends {
            logger.push(open_backend(backend)?);
        }
        for (key, value) in &self.fields {
            logger.add_field(key, value);
        }
        Ok(logger)
    }
}

impl Default for FanoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn open_backend(config: &BackendConfig) -> Result<Box<dyn Logger>> {
    config.validate()?;

    let writer = match &config.target {
        Target::Stdout => SharedWriter::stdout(),
        Target::Stderr => SharedWriter::stderr(),
        Target::File { path } => SharedWriter::file(path)?,
    };

    let mut logger: Box<dyn Logger> = Box::new(
        StructuredLogger::new(writer, config.level, config.format)
            .with_config(config.formatter_config()),
    );
    for (key, value) in &config.fields {
        logger = logger.with_field(key, value);
    }
    Ok(logger)
}

impl LoggerConfig {
    /// Validate the configuration and build its fan-out logger
    pub fn build(&self) -> Result<FanoutLogger> {
        self.validate()?;
        FanoutBuilder::new().config(self.clone()).build()
    }
}
