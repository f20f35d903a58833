//! Declarative logger configuration
//!
//! A [`LoggerConfig`] lists the backends a fan-out logger should broadcast
//! to. It is plain serde data, so it can be embedded in an application's
//! own configuration file and handed over as JSON.
//!
//! ```
//! use rust_fanout_logger::core::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "backends": [
//!         { "format": "text", "level": "info", "target": { "type": "stderr" } },
//!         { "format": "gelf", "level": "debug", "target": { "type": "stdout" }, "host": "web-1" }
//!     ]
//! }"#).unwrap();
//! assert_eq!(config.backends.len(), 2);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::output_format::OutputFormat;
use super::timestamp::{FormatterConfig, TimestampFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a backend writes its lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
    File { path: PathBuf },
}

/// One backend of a fan-out logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub target: Target,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
    #[serde(default = "default_colors")]
    pub colors: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Persistent fields attached to this backend only
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

fn default_colors() -> bool {
    true
}

impl BackendConfig {
    pub fn new(format: OutputFormat, level: LogLevel, target: Target) -> Self {
        Self {
            format,
            level,
            target,
            timestamp_format: TimestampFormat::default(),
            colors: default_colors(),
            host: None,
            fields: BTreeMap::new(),
        }
    }

    /// Formatter options derived from this backend's settings
    pub fn formatter_config(&self) -> FormatterConfig {
        let config = FormatterConfig::new()
            .with_timestamp_format(self.timestamp_format.clone())
            .with_colors(self.colors);
        match &self.host {
            Some(host) => config.with_host(host.clone()),
            None => config,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Target::File { path } = &self.target {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::config("target", "file path must not be empty"));
            }
        }
        if self.fields.keys().any(|key| key.is_empty()) {
            return Err(LoggerError::config("fields", "field keys must not be empty"));
        }
        if !self.timestamp_format.is_valid() {
            return Err(LoggerError::config(
                "timestamp_format",
                format!("unknown strftime specifier in {:?}", self.timestamp_format),
            ));
        }
        Ok(())
    }
}

/// Full fan-out configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub backends: Vec<BackendConfig>,
    /// Persistent fields attached to every backend
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.backends.is_empty() {
            return Err(LoggerError::config(
                "backends",
                "at least one backend is required",
            ));
        }
        if self.fields.keys().any(|key| key.is_empty()) {
            return Err(LoggerError::config("fields", "field keys must not be empty"));
        }
        self.backends.iter().try_for_each(BackendConfig::validate)
    }
}
