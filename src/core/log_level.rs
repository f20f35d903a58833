//! Log level definitions
//!
//! Levels carry syslog numeric codes (5 is skipped because syslog uses it for
//! "notice"). Ordering is by severity, so `Debug < Info < ... < Panic` even
//! though the numeric codes run the other way.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum LogLevel {
    Panic = 1,
    Fatal = 2,
    Error = 3,
    Warn = 4,
    #[default]
    Info = 6,
    Debug = 7,
}

impl LogLevel {
    /// All levels from least to most severe
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    /// Syslog numeric code of this level
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Map a numeric code to a level by exact match
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(LogLevel::Panic),
            2 => Some(LogLevel::Fatal),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Warn),
            6 => Some(LogLevel::Info),
            7 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Map any numeric code to a level, falling back to `Info`
    ///
    /// Never fails: out-of-range codes are normalized rather than rejected.
    ///
    /// ```
    /// use rust_fanout_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::resolve(4), LogLevel::Warn);
    /// assert_eq!(LogLevel::resolve(5), LogLevel::Info);
    /// assert_eq!(LogLevel::resolve(1000), LogLevel::Info);
    /// ```
    pub const fn resolve(code: i32) -> Self {
        match Self::from_code(code) {
            Some(level) => level,
            None => LogLevel::Info,
        }
    }

    /// Whether a logger with this threshold emits entries at `level`
    #[inline]
    pub fn enables(self, level: LogLevel) -> bool {
        level >= self
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
        }
    }

    /// Lowercase name, as used by the JSON backend
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Panic => "panic",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
            LogLevel::Panic => Magenta,
        }
    }

    #[inline]
    fn severity(self) -> i32 {
        -self.code()
    }
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.code()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "PANIC" => Ok(LogLevel::Panic),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
