//! One configuration scope: the root or a single named logger

use crate::core::{DateFormat, Formatter, LogLevel, LoggerConfiguration, LoggerError, Sink};
use crate::formatters::{FlexFormatter, QuickFormatter};
use crate::sinks::SinkFactory;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Raw values for one scope, exactly as written in the document.
///
/// Every field is optional; what is missing is inherited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Lowest level written, e.g. `"INFO"` (case-sensitive)
    pub level: Option<String>,
    /// Fixed layout name, e.g. `"LevelNameMessage"`; wins over `flex_format`
    pub quick_format: Option<String>,
    /// Ordered field tokens, e.g. `"DATE LEVEL MESSAGE"`
    pub flex_format: Option<String>,
    /// Date pattern for the formatter defined in this scope
    pub date_format: Option<String>,
    /// Destinations: `"console"`, `"file"` or `"console file"`
    pub location: Option<String>,
    /// Target of the `file` destination
    pub location_filename: Option<String>,
}

impl ScopeConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Turn raw values into a partial configuration.
    ///
    /// Nothing here fails: unknown level names fall back to TRACE, unknown
    /// layouts to their defaults, and unusable destinations are skipped with
    /// a warning.
    pub fn to_configuration(&self, name: &str, sinks: &SinkFactory) -> LoggerConfiguration {
        let mut config = LoggerConfiguration::new(name);
        config.level = self.level.as_deref().map(LogLevel::parse);
        config.formatter = self.formatter();
        let (resolved, problems) = self.sinks(name, sinks);
        for problem in problems {
            eprintln!("[LOGGER WARNING] {}", problem);
        }
        config.sinks = resolved;
        config
    }

    fn formatter(&self) -> Option<Arc<dyn Formatter>> {
        let formatter: Arc<dyn Formatter> = if let Some(format) = &self.quick_format {
            Arc::new(QuickFormatter::from_format_str(format))
        } else if let Some(format) = &self.flex_format {
            Arc::new(FlexFormatter::from_format_str(format))
        } else {
            return None;
        };

        if let Some(pattern) = &self.date_format {
            formatter.set_date_format(DateFormat::new(pattern.as_str()));
        }
        Some(formatter)
    }

    /// Sinks named by `location`, plus the destinations that had to be skipped
    fn sinks(
        &self,
        scope: &str,
        factory: &SinkFactory,
    ) -> (Vec<Arc<dyn Sink>>, Vec<LoggerError>) {
        let mut sinks: Vec<Arc<dyn Sink>> = Vec::new();
        let mut problems = Vec::new();
        let Some(location) = &self.location else {
            return (sinks, problems);
        };

        let component = format!("location of '{}'", scope);
        for token in location.to_lowercase().split_whitespace() {
            match token {
                "console" => sinks.push(factory.console()),
                "file" => match &self.location_filename {
                    Some(filename) => sinks.push(factory.file(filename)),
                    None => problems.push(LoggerError::config(
                        component.as_str(),
                        "file destination without location_filename",
                    )),
                },
                other => problems.push(LoggerError::config(
                    component.as_str(),
                    format!("unrecognized destination '{}'", other),
                )),
            }
        }
        (sinks, problems)
    }
}
