//! Ordered-field formatter

use crate::core::{CallSite, DateFormat, Formatter, LogLevel};
use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::fmt;

/// A field a [`FlexFormatter`] can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexPart {
    Date,
    Name,
    Level,
    Message,
    /// `[file.rs:42]`, omitted without a call site
    Line,
    /// `[module::path]`, omitted without a call site
    Func,
}

impl FlexPart {
    pub fn to_str(&self) -> &'static str {
        match self {
            FlexPart::Date => "DATE",
            FlexPart::Name => "NAME",
            FlexPart::Level => "LEVEL",
            FlexPart::Message => "MESSAGE",
            FlexPart::Line => "LINE",
            FlexPart::Func => "FUNC",
        }
    }

    /// Token lookup used by configuration strings; anything unknown is a date
    pub fn from_token(token: &str) -> Self {
        match token {
            "MESSAGE" => FlexPart::Message,
            "NAME" => FlexPart::Name,
            "LEVEL" => FlexPart::Level,
            "LINE" => FlexPart::Line,
            "FUNC" => FlexPart::Func,
            _ => FlexPart::Date,
        }
    }
}

impl fmt::Display for FlexPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Formatter emitting an explicit, ordered list of fields.
///
/// Fields are separated by a single space and the field right before
/// `MESSAGE` gets a trailing colon.
///
/// # Examples
///
/// ```
/// use rust_named_logger::{FlexFormatter, FlexPart, Formatter, LogLevel};
///
/// let formatter = FlexFormatter::new(vec![FlexPart::Level, FlexPart::Message]);
/// assert_eq!(formatter.format("Net", LogLevel::Info, "up", None), "INFO: up");
///
/// let formatter = FlexFormatter::from_format_str("name level message");
/// assert_eq!(formatter.format("Net", LogLevel::Warn, "slow", None), "Net WARN: slow");
/// ```
pub struct FlexFormatter {
    parts: Vec<FlexPart>,
    date_format: RwLock<DateFormat>,
}

impl FlexFormatter {
    pub fn new(parts: Vec<FlexPart>) -> Self {
        Self {
            parts,
            date_format: RwLock::new(DateFormat::default()),
        }
    }

    /// Build from a whitespace separated token string such as `"DATE LEVEL MESSAGE"`.
    ///
    /// Tokens are upper-cased before matching. A string with no tokens at all
    /// yields a single date field.
    pub fn from_format_str(tokens: &str) -> Self {
        let mut parts: Vec<FlexPart> = tokens
            .to_uppercase()
            .split_whitespace()
            .map(FlexPart::from_token)
            .collect();
        if parts.is_empty() {
            parts.push(FlexPart::Date);
        }
        Self::new(parts)
    }

    pub fn parts(&self) -> &[FlexPart] {
        &self.parts
    }

    /// Render with an explicit timestamp
    pub fn render(
        &self,
        timestamp: &DateTime<Local>,
        logger_name: &str,
        level: LogLevel,
        message: &str,
        call_site: Option<&CallSite>,
    ) -> String {
        let mut fields: Vec<(FlexPart, String)> = Vec::with_capacity(self.parts.len());

        for part in &self.parts {
            let text = match part {
                FlexPart::Date => self.date_format.read().format(timestamp),
                FlexPart::Name => logger_name.to_string(),
                FlexPart::Level => level.label().to_string(),
                FlexPart::Message => message.to_string(),
                FlexPart::Line => match call_site {
                    Some(site) => format!("[{}:{}]", site.file_name(), site.line),
                    None => continue,
                },
                FlexPart::Func => match call_site {
                    Some(site) => format!("[{}]", site.function),
                    None => continue,
                },
            };
            fields.push((*part, text));
        }

        let mut out = String::new();
        for (index, (_, text)) in fields.iter().enumerate() {
            out.push_str(text);
            if let Some((next, _)) = fields.get(index + 1) {
                if *next == FlexPart::Message {
                    out.push(':');
                }
                out.push(' ');
            }
        }
        out
    }
}

impl Formatter for FlexFormatter {
    fn format(
        &self,
        logger_name: &str,
        level: LogLevel,
        message: &str,
        call_site: Option<&CallSite>,
    ) -> String {
        self.render(&Local::now(), logger_name, level, message, call_site)
    }

    fn describe(&self) -> String {
        let parts: Vec<&str> = self.parts.iter().map(FlexPart::to_str).collect();
        format!("FlexFormatter with {}", parts.join(" "))
    }

    fn date_format(&self) -> DateFormat {
        self.date_format.read().clone()
    }

    fn set_date_format(&self, format: DateFormat) {
        *self.date_format.write() = format;
    }
}
