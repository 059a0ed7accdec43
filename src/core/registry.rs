//! Registry of named loggers and their configuration

use super::{
    call_site::CallSite,
    configuration::LoggerConfiguration,
    formatter::Formatter,
    log_level::LogLevel,
    logger::Logger,
    selector::LogSelector,
    sink::Sink,
};
use crate::config::LoggingConfig;
use crate::formatters::{QuickFormat, QuickFormatter};
use crate::sinks::{FileSink, SinkFactory};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Name of the base configuration every logger starts from
pub const ROOT_CONFIGURATION_NAME: &str = "ROOT";

/// Name of the logger behind the registry-level convenience calls
pub const SHARED_LOGGER_NAME: &str = "Shared";

struct RegistryState {
    loggers: HashMap<String, Arc<Logger>>,
    /// Loggers installed through `register`; resolution never rewrites them
    registered: HashSet<String>,
    /// Explicit per-name overrides only
    configurations: HashMap<String, LoggerConfiguration>,
    root: LoggerConfiguration,
    shared: LoggerConfiguration,
    selector: LogSelector,
    enabled: bool,
}

impl RegistryState {
    /// Root, then the shared base for the shared logger, then the explicit
    /// override for exactly this name.
    // Names match exactly; a hierarchical lookup (walking dotted parents)
    // would slot in between the shared and explicit layers.
    fn resolve(&self, name: &str) -> LoggerConfiguration {
        let mut config = LoggerConfiguration::new(name);
        config.overlay(&self.root);

        if name == SHARED_LOGGER_NAME {
            config.overlay(&self.shared);
        }

        if let Some(explicit) = self.configurations.get(name) {
            config.overlay(explicit);
        }

        config
    }

    fn should_enable(&self, name: &str) -> bool {
        self.enabled && self.selector.should_enable(name)
    }

    fn create_logger(&self, name: &str) -> Logger {
        let config = self.resolve(name);
        let formatter = config
            .formatter
            .unwrap_or_else(|| Arc::new(QuickFormatter::new(QuickFormat::All)));
        let logger = Logger::new(
            name,
            config.level.unwrap_or(LogLevel::Trace),
            formatter,
            config.sinks,
        );
        logger.set_enabled(self.should_enable(name));
        logger
    }

    fn store_configuration(&mut self, config: LoggerConfiguration) {
        if let Some(logger) = self.loggers.get(&config.name) {
            logger.apply(
                config.level,
                config.formatter.clone(),
                Some(config.sinks.clone()),
            );
        }
        self.configurations.insert(config.name.clone(), config);
    }

    fn refresh_enabled(&self) {
        for (name, logger) in &self.loggers {
            logger.set_enabled(self.should_enable(name));
        }
    }

    /// Re-resolve every logger the registry built itself
    fn refresh_configuration(&self) {
        for (name, logger) in &self.loggers {
            if self.registered.contains(name) {
                continue;
            }
            let config = self.resolve(name);
            logger.apply(config.level, config.formatter, Some(config.sinks));
        }
    }
}

/// Owns every named logger, the configuration they are resolved from and the
/// rules deciding which of them are enabled.
///
/// A registry is an ordinary value: create one, share it (it is `Sync`) and
/// drop or [`shutdown`](LogRegistry::shutdown) it when done. A lazily
/// initialized process-wide instance is available through
/// [`registry()`](crate::registry) for the free convenience functions.
///
/// # Example
///
/// ```
/// use rust_named_logger::{LogLevel, LogRegistry};
///
/// let registry = LogRegistry::new();
/// registry.configure_logger("Net", Some(LogLevel::Warn), None, None);
///
/// let net = registry.get_logger("Net");
/// assert_eq!(net.level(), LogLevel::Warn);
/// assert!(!net.is_loggable(LogLevel::Info));
///
/// registry.disable_logging();
/// assert!(!net.is_loggable(LogLevel::Severe));
/// ```
pub struct LogRegistry {
    state: RwLock<RegistryState>,
    sinks: Arc<SinkFactory>,
}

impl LogRegistry {
    /// Registry with built-in defaults, sharing the process-wide sink factory
    pub fn new() -> Self {
        Self::with_sink_factory(SinkFactory::global())
    }

    /// Registry with built-in defaults.
    ///
    /// The root configuration logs everything at TRACE to the console with the
    /// most verbose layout; the shared logger uses the `LevelMessage` layout.
    pub fn with_sink_factory(sinks: Arc<SinkFactory>) -> Self {
        let console: Arc<dyn Sink> = sinks.console();

        let root = LoggerConfiguration::new(ROOT_CONFIGURATION_NAME)
            .with_level(LogLevel::Trace)
            .with_formatter(Arc::new(QuickFormatter::new(QuickFormat::All)))
            .with_sink(Arc::clone(&console));

        let shared = LoggerConfiguration::new(SHARED_LOGGER_NAME)
            .with_level(LogLevel::Trace)
            .with_formatter(Arc::new(QuickFormatter::new(QuickFormat::LevelMessage)))
            .with_sink(console);

        Self {
            state: RwLock::new(RegistryState {
                loggers: HashMap::new(),
                registered: HashSet::new(),
                configurations: HashMap::new(),
                root,
                shared,
                selector: LogSelector::new(),
                enabled: true,
            }),
            sinks,
        }
    }

    /// Registry with defaults, then `config` applied on top
    pub fn from_config(config: &LoggingConfig) -> Self {
        let registry = Self::new();
        registry.apply_config(config);
        registry
    }

    /// Registry configured from the default document location.
    ///
    /// A missing document leaves the defaults in place; an unreadable or
    /// malformed one is reported on stderr and ignored.
    pub fn load() -> Self {
        let registry = Self::new();
        if let Some(path) = LoggingConfig::default_path() {
            registry.load_config_file(&path);
        }
        registry
    }

    /// Apply the document at `path`, falling back to the current configuration
    /// if it cannot be read.
    pub fn load_config_file(&self, path: &Path) {
        match LoggingConfig::load_from(path) {
            Ok(config) => self.apply_config(&config),
            Err(e) => eprintln!(
                "[LOGGER WARNING] Ignoring configuration '{}': {}",
                path.display(),
                e
            ),
        }
    }

    /// Apply a configuration document.
    ///
    /// Root-scope values overlay the root configuration, each named scope
    /// replaces the stored configuration for that name, and the selector rules
    /// are set when present. Loggers built by the registry are re-resolved; a
    /// [`register`](LogRegistry::register)ed logger only takes the fields of a
    /// scope carrying its own name.
    pub fn apply_config(&self, config: &LoggingConfig) {
        let root = config
            .root
            .to_configuration(ROOT_CONFIGURATION_NAME, &self.sinks);
        let scopes: Vec<LoggerConfiguration> = config
            .loggers
            .iter()
            .map(|(name, scope)| scope.to_configuration(name, &self.sinks))
            .collect();

        let mut state = self.state.write();
        state.root.overlay(&root);
        for scope in scopes {
            state.store_configuration(scope);
        }
        if let Some(rule) = &config.enable {
            state.selector.set_include_rule(rule);
        }
        if let Some(rule) = &config.disable {
            state.selector.set_exclude_rule(rule);
        }
        state.refresh_configuration();
        state.refresh_enabled();
    }

    /// The logger for `name`, created from its resolved configuration on first use
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.state.read().loggers.get(name) {
            return Arc::clone(logger);
        }

        let mut state = self.state.write();
        if let Some(logger) = state.loggers.get(name) {
            return Arc::clone(logger);
        }
        let logger = Arc::new(state.create_logger(name));
        state.loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// Register a logger built elsewhere, replacing any logger of the same name.
    ///
    /// Its enabled flag is evaluated against the current rules. Root changes
    /// and configuration documents leave its level, formatter and sinks alone;
    /// only configuration given for its exact name is pushed into it.
    pub fn register(&self, logger: Logger) -> Arc<Logger> {
        let mut state = self.state.write();
        logger.set_enabled(state.should_enable(logger.name()));
        let logger = Arc::new(logger);
        state.registered.insert(logger.name().to_string());
        state
            .loggers
            .insert(logger.name().to_string(), Arc::clone(&logger));
        logger
    }

    /// Set or change the configuration of one logger name.
    ///
    /// Fields left as `None` keep whatever was configured for this name
    /// before (not the root values). A given sink replaces the whole sink
    /// list. If the logger already exists it is updated in place.
    pub fn configure_logger(
        &self,
        name: &str,
        level: Option<LogLevel>,
        formatter: Option<Arc<dyn Formatter>>,
        sink: Option<Arc<dyn Sink>>,
    ) {
        let mut state = self.state.write();
        let config = LoggerConfiguration::merged(
            name,
            state.configurations.get(name),
            level,
            formatter,
            sink,
        );
        state.store_configuration(config);
    }

    /// Store `config` as the explicit configuration for its name, as is,
    /// and push it into the live logger.
    pub fn apply_configuration(&self, config: LoggerConfiguration) {
        self.state.write().store_configuration(config);
    }

    /// Overlay `layer` on the root configuration and refresh live loggers
    pub fn configure_root(&self, layer: &LoggerConfiguration) {
        let mut state = self.state.write();
        state.root.overlay(layer);
        state.refresh_configuration();
    }

    /// The configuration a logger named `name` resolves to right now
    pub fn configuration_for(&self, name: &str) -> LoggerConfiguration {
        self.state.read().resolve(name)
    }

    /// The explicit configuration stored for `name`, if any
    pub fn explicit_configuration(&self, name: &str) -> Option<LoggerConfiguration> {
        self.state.read().configurations.get(name).cloned()
    }

    pub fn set_enabled(&self, enabled: bool) {
        let mut state = self.state.write();
        state.enabled = enabled;
        state.refresh_enabled();
    }

    /// Turn off every logger, present and future
    pub fn disable_logging(&self) {
        self.set_enabled(false);
    }

    /// Turn logging back on, subject to the selector rules
    pub fn enable_logging(&self) {
        self.set_enabled(true);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.read().enabled
    }

    /// Change the include and/or exclude rule and re-evaluate every logger
    pub fn set_selector(&self, include: Option<&str>, exclude: Option<&str>) {
        let mut state = self.state.write();
        if let Some(rule) = include {
            state.selector.set_include_rule(rule);
        }
        if let Some(rule) = exclude {
            state.selector.set_exclude_rule(rule);
        }
        state.refresh_enabled();
    }

    pub fn selector(&self) -> LogSelector {
        self.state.read().selector.clone()
    }

    /// Names of every live logger
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().loggers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn shared_logger(&self) -> Arc<Logger> {
        self.get_logger(SHARED_LOGGER_NAME)
    }

    pub fn sink_factory(&self) -> &Arc<SinkFactory> {
        &self.sinks
    }

    pub fn console_sink(&self) -> Arc<dyn Sink> {
        self.sinks.console()
    }

    /// The deduplicated file sink for `filename`
    pub fn file_sink(&self, filename: &str) -> Arc<FileSink> {
        self.sinks.file(filename)
    }

    /// Flush the console and every file sink handed out by this registry's factory
    pub fn flush(&self) {
        self.sinks.console().flush();
        for sink in self.sinks.file_sinks() {
            sink.flush();
        }
    }

    /// Teardown: disable logging, flush, and forget every live logger.
    ///
    /// Handles still held elsewhere stay valid but write nothing.
    pub fn shutdown(&self) {
        let mut state = self.state.write();
        state.enabled = false;
        state.refresh_enabled();
        state.loggers.clear();
        state.registered.clear();
        drop(state);
        self.flush();
    }

    /// Log through the shared logger without a call site
    pub fn log<F, S>(&self, level: LogLevel, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.shared_logger().log(level, message);
    }

    /// Log through the shared logger with a call site
    pub fn log_at<F, S>(&self, level: LogLevel, call_site: CallSite, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.shared_logger().log_at(level, call_site, message);
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.shared_logger().trace(message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.shared_logger().debug(message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.shared_logger().info(message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.shared_logger().warn(message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.shared_logger().error(message);
    }

    pub fn severe(&self, message: impl Into<String>) {
        self.shared_logger().severe(message);
    }
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}
