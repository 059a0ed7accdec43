//! Named logger: level gate and dispatch to sinks

use super::{
    call_site::CallSite, formatter::Formatter, log_level::LogLevel, sink::Sink,
};
use crate::formatters::QuickFormatter;
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::sync::Arc;

/// Fields that change together when configuration is applied
struct LoggerState {
    level: LogLevel,
    formatter: Arc<dyn Formatter>,
    sinks: Vec<Arc<dyn Sink>>,
    enabled: bool,
}

/// Handle through which application code emits messages under one name.
///
/// Loggers are normally obtained from a [`LogRegistry`](crate::LogRegistry),
/// which owns their configuration and their enabled flag. The message passed
/// to [`Logger::log`] is a closure that only runs when the message will
/// actually be written.
///
/// # Example
///
/// ```
/// use rust_named_logger::{LogLevel, LogRegistry};
///
/// let registry = LogRegistry::new();
/// let logger = registry.get_logger("Net");
/// logger.log(LogLevel::Info, || format!("{} peers connected", 3));
/// logger.warn("link is slow");
/// ```
pub struct Logger {
    name: String,
    state: RwLock<LoggerState>,
}

impl Logger {
    /// Create a stand-alone logger.
    ///
    /// An empty sink list falls back to the console sink.
    pub fn new(
        name: impl Into<String>,
        level: LogLevel,
        formatter: Arc<dyn Formatter>,
        sinks: Vec<Arc<dyn Sink>>,
    ) -> Self {
        let sinks = if sinks.is_empty() {
            vec![ConsoleSink::instance() as Arc<dyn Sink>]
        } else {
            sinks
        };

        Self {
            name: name.into(),
            state: RwLock::new(LoggerState {
                level,
                formatter,
                sinks,
                enabled: true,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.state.read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.write().level = level;
    }

    pub fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(&self.state.read().formatter)
    }

    pub fn sinks(&self) -> Vec<Arc<dyn Sink>> {
        self.state.read().sinks.clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.read().enabled
    }

    /// Only the registry decides whether a logger is enabled
    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.state.write().enabled = enabled;
    }

    /// Replace any of level, formatter and sink list as one atomic update
    pub(crate) fn apply(
        &self,
        level: Option<LogLevel>,
        formatter: Option<Arc<dyn Formatter>>,
        sinks: Option<Vec<Arc<dyn Sink>>>,
    ) {
        let mut state = self.state.write();
        if let Some(level) = level {
            state.level = level;
        }
        if let Some(formatter) = formatter {
            state.formatter = formatter;
        }
        if let Some(sinks) = sinks.filter(|sinks| !sinks.is_empty()) {
            state.sinks = sinks;
        }
    }

    /// Whether a message at `level` would currently be written
    pub fn is_loggable(&self, level: LogLevel) -> bool {
        let state = self.state.read();
        state.enabled && level.rank() >= state.level.rank()
    }

    /// Log without a call site
    pub fn log<F, S>(&self, level: LogLevel, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.dispatch(level, None, message);
    }

    /// Log with the location of the call, as the logging macros do
    pub fn log_at<F, S>(&self, level: LogLevel, call_site: CallSite, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.dispatch(level, Some(&call_site), message);
    }

    fn dispatch<F, S>(&self, level: LogLevel, call_site: Option<&CallSite>, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        // Gate and snapshot under one read lock; the message is built outside it
        // so a message closure that logs cannot deadlock against a writer.
        let (formatter, sinks) = {
            let state = self.state.read();
            if !state.enabled || level.rank() < state.level.rank() {
                return;
            }
            (Arc::clone(&state.formatter), state.sinks.clone())
        };

        let message: String = message().into();
        let line = formatter.format(&self.name, level, &message, call_site);
        Self::write_all(&sinks, &line);
    }

    /// Write one line to every sink in order, isolating panics per sink.
    fn write_all(sinks: &[Arc<dyn Sink>], line: &str) {
        for (idx, sink) in sinks.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.write(line)));

            if let Err(panic_info) = result {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                     Other sinks continue to function.",
                    idx,
                    sink.describe(),
                    panic_msg
                );
            }
        }
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, || message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, || message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, || message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, || message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, || message);
    }

    #[inline]
    pub fn severe(&self, message: impl Into<String>) {
        self.log(LogLevel::Severe, || message);
    }

    /// Create a builder for a stand-alone Logger
    ///
    /// # Example
    /// ```
    /// use rust_named_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::builder("Worker")
    ///     .level(LogLevel::Debug)
    ///     .formatter(Arc::new(QuickFormatter::new(QuickFormat::LevelMessage)))
    ///     .sink(ConsoleSink::instance())
    ///     .build();
    /// assert_eq!(logger.level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &state.level)
            .field("formatter", &state.formatter.describe())
            .field(
                "sinks",
                &state.sinks.iter().map(|s| s.describe()).collect::<Vec<_>>(),
            )
            .field("enabled", &state.enabled)
            .finish()
    }
}

/// Builder for constructing a Logger outside a registry
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    formatter: Option<Arc<dyn Formatter>>,
    sinks: Vec<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Defaults: INFO, `LevelNameMessage` layout, console sink
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Info,
            formatter: None,
            sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Add a sink; sinks receive messages in the order they were added
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn build(self) -> Logger {
        let formatter = self
            .formatter
            .unwrap_or_else(|| Arc::new(QuickFormatter::default()));
        Logger::new(self.name, self.level, formatter, self.sinks)
    }
}
