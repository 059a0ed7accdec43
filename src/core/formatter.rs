//! Formatter trait for rendering log lines

use super::{call_site::CallSite, log_level::LogLevel, timestamp::DateFormat};

/// Renders one log event into the line handed to sinks.
///
/// Formatters are shared between loggers (`Arc<dyn Formatter>`). The date
/// format is the only mutable part and can be replaced at any time without
/// touching the layout.
pub trait Formatter: Send + Sync {
    fn format(
        &self,
        logger_name: &str,
        level: LogLevel,
        message: &str,
        call_site: Option<&CallSite>,
    ) -> String;

    /// Human readable description of the layout
    fn describe(&self) -> String;

    fn date_format(&self) -> DateFormat;

    fn set_date_format(&self, format: DateFormat);
}
