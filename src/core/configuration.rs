//! Partial logger configuration and the merge rules between layers

use super::{formatter::Formatter, log_level::LogLevel, sink::Sink};
use std::fmt;
use std::sync::Arc;

/// Level, formatter and sinks for one logger name or base scope.
///
/// Absent fields mean "inherit": `None` for level and formatter, an empty
/// list for sinks.
#[derive(Clone)]
pub struct LoggerConfiguration {
    pub name: String,
    pub level: Option<LogLevel>,
    pub formatter: Option<Arc<dyn Formatter>>,
    pub sinks: Vec<Arc<dyn Sink>>,
}

impl LoggerConfiguration {
    /// Empty configuration: every field inherits
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            formatter: None,
            sinks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// True when nothing is overridden
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.formatter.is_none() && self.sinks.is_empty()
    }

    /// True when nothing would be inherited
    pub fn is_complete(&self) -> bool {
        self.level.is_some() && self.formatter.is_some() && !self.sinks.is_empty()
    }

    /// Lay `layer` over `self`: each field present in `layer` wins, and a
    /// non-empty sink list replaces ours entirely.
    pub fn overlay(&mut self, layer: &LoggerConfiguration) {
        if let Some(level) = layer.level {
            self.level = Some(level);
        }
        if let Some(formatter) = &layer.formatter {
            self.formatter = Some(Arc::clone(formatter));
        }
        if !layer.sinks.is_empty() {
            self.sinks = layer.sinks.clone();
        }
    }

    /// Build the configuration stored by a programmatic configure call.
    ///
    /// Given fields win. Missing fields come from `prior`, the configuration
    /// previously stored for the same name, never from the root.
    pub fn merged(
        name: &str,
        prior: Option<&LoggerConfiguration>,
        level: Option<LogLevel>,
        formatter: Option<Arc<dyn Formatter>>,
        sink: Option<Arc<dyn Sink>>,
    ) -> Self {
        let mut merged = Self::new(name);
        if let Some(prior) = prior {
            merged.overlay(prior);
        }

        let mut given = Self::new(name);
        given.level = level;
        given.formatter = formatter;
        given.sinks.extend(sink);
        merged.overlay(&given);
        merged
    }
}

impl fmt::Debug for LoggerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfiguration")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("formatter", &self.formatter.as_ref().map(|formatter| formatter.describe()))
            .field(
                "sinks",
                &self.sinks.iter().map(|s| s.describe()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for LoggerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match self.level {
            Some(level) => write!(f, " level={}", level)?,
            None => write!(f, " level=<inherited>")?,
        }
        match &self.formatter {
            Some(formatter) => write!(f, " formatter=[{}]", formatter.describe())?,
            None => write!(f, " formatter=<inherited>")?,
        }
        if self.sinks.is_empty() {
            write!(f, " sinks=<inherited>")
        } else {
            let sinks: Vec<String> = self.sinks.iter().map(|s| s.describe()).collect();
            write!(f, " sinks=[{}]", sinks.join(", "))
        }
    }
}
