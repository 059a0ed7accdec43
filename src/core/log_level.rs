//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Trace = 100,
    Debug = 200,
    Info = 300,
    Warn = 400,
    Error = 500,
    Severe = 600,
}

impl LogLevel {
    /// All levels in ascending rank order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Severe,
    ];

    /// Level returned by [`LogLevel::parse`] for names it does not recognize
    pub const PARSE_DEFAULT: LogLevel = LogLevel::Trace;

    /// Integer rank used by the level gate. Strictly increasing with severity.
    #[inline]
    pub fn rank(&self) -> u16 {
        *self as u16
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Severe => "SEVERE",
        }
    }

    /// Display label written by formatters
    #[inline]
    pub fn label(&self) -> &'static str {
        self.to_str()
    }

    /// Parse a level name from a configuration source.
    ///
    /// Matching is case-sensitive. Unknown names never fail; they yield
    /// [`LogLevel::PARSE_DEFAULT`].
    ///
    /// ```
    /// use rust_named_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
    /// assert_eq!(LogLevel::parse("warn"), LogLevel::Trace);
    /// ```
    pub fn parse(name: &str) -> Self {
        Self::parse_or(name, Self::PARSE_DEFAULT)
    }

    /// Same as [`LogLevel::parse`] with a caller-chosen fallback
    pub fn parse_or(name: &str, default: LogLevel) -> Self {
        name.parse().unwrap_or(default)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "SEVERE" => Ok(LogLevel::Severe),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
