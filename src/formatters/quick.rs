//! Fixed-layout formatter

use crate::core::{CallSite, DateFormat, Formatter, LogLevel};
use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::fmt;
use std::str::FromStr;

/// The fixed layouts a [`QuickFormatter`] can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuickFormat {
    /// `up`
    MessageOnly,
    /// `INFO: up`
    LevelMessage,
    /// `Net: up`
    NameMessage,
    /// `INFO Net: up`
    #[default]
    LevelNameMessage,
    /// `2025-01-08 10:30:45.123 INFO: up`
    DateLevelMessage,
    /// `2025-01-08 10:30:45.123 up`
    DateMessage,
    /// `2025-01-08 10:30:45.123 INFO Net: up`
    All,
}

impl QuickFormat {
    pub const ALL: [QuickFormat; 7] = [
        QuickFormat::MessageOnly,
        QuickFormat::LevelMessage,
        QuickFormat::NameMessage,
        QuickFormat::LevelNameMessage,
        QuickFormat::DateLevelMessage,
        QuickFormat::DateMessage,
        QuickFormat::All,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            QuickFormat::MessageOnly => "MessageOnly",
            QuickFormat::LevelMessage => "LevelMessage",
            QuickFormat::NameMessage => "NameMessage",
            QuickFormat::LevelNameMessage => "LevelNameMessage",
            QuickFormat::DateLevelMessage => "DateLevelMessage",
            QuickFormat::DateMessage => "DateMessage",
            QuickFormat::All => "All",
        }
    }

    /// Look up a layout by name; unknown names select [`QuickFormat::All`]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(QuickFormat::All)
    }
}

impl fmt::Display for QuickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for QuickFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickFormat::ALL
            .into_iter()
            .find(|format| format.to_str() == s)
            .ok_or_else(|| format!("Invalid quick format: '{}'", s))
    }
}

/// Formatter with a small set of fixed layouts.
///
/// # Examples
///
/// ```
/// use rust_named_logger::{Formatter, LogLevel, QuickFormat, QuickFormatter};
///
/// let formatter = QuickFormatter::new(QuickFormat::LevelNameMessage);
/// assert_eq!(formatter.format("Net", LogLevel::Info, "up", None), "INFO Net: up");
/// ```
pub struct QuickFormatter {
    format: QuickFormat,
    date_format: RwLock<DateFormat>,
}

impl QuickFormatter {
    pub fn new(format: QuickFormat) -> Self {
        Self {
            format,
            date_format: RwLock::new(DateFormat::default()),
        }
    }

    /// Build from a configured layout name, falling back to [`QuickFormat::All`]
    pub fn from_format_str(name: &str) -> Self {
        Self::new(QuickFormat::from_name(name))
    }

    pub fn quick_format(&self) -> QuickFormat {
        self.format
    }

    /// Render with an explicit timestamp
    pub fn render(
        &self,
        timestamp: &DateTime<Local>,
        logger_name: &str,
        level: LogLevel,
        message: &str,
    ) -> String {
        match self.format {
            QuickFormat::MessageOnly => message.to_string(),
            QuickFormat::LevelMessage => format!("{}: {}", level.label(), message),
            QuickFormat::NameMessage => format!("{}: {}", logger_name, message),
            QuickFormat::LevelNameMessage => {
                format!("{} {}: {}", level.label(), logger_name, message)
            }
            QuickFormat::DateLevelMessage => format!(
                "{} {}: {}",
                self.date_format.read().format(timestamp),
                level.label(),
                message
            ),
            QuickFormat::DateMessage => {
                format!("{} {}", self.date_format.read().format(timestamp), message)
            }
            QuickFormat::All => format!(
                "{} {} {}: {}",
                self.date_format.read().format(timestamp),
                level.label(),
                logger_name,
                message
            ),
        }
    }
}

impl Default for QuickFormatter {
    fn default() -> Self {
        Self::new(QuickFormat::default())
    }
}

impl Formatter for QuickFormatter {
    fn format(
        &self,
        logger_name: &str,
        level: LogLevel,
        message: &str,
        _call_site: Option<&CallSite>,
    ) -> String {
        self.render(&Local::now(), logger_name, level, message)
    }

    fn describe(&self) -> String {
        format!("QuickFormatter format={}", self.format)
    }

    fn date_format(&self) -> DateFormat {
        self.date_format.read().clone()
    }

    fn set_date_format(&self, format: DateFormat) {
        *self.date_format.write() = format;
    }
}
