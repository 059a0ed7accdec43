//! # Rust Named Logger
//!
//! A lightweight logging library built around named loggers.
//!
//! ## Features
//!
//! - **Named Loggers**: one shared instance per name, created on first use
//! - **Layered Configuration**: per-name settings over root defaults
//! - **Pluggable Output**: fixed or field-ordered formatters, console and file sinks
//! - **Selector Rules**: enable or disable loggers by name from a config document
//! - **Lazy Messages**: message closures only run when the message is written
//!
//! ## Example
//!
//! ```
//! use rust_named_logger::{LogLevel, LogRegistry, FlexFormatter};
//! use std::sync::Arc;
//!
//! let registry = LogRegistry::new();
//! registry.configure_logger(
//!     "Net",
//!     Some(LogLevel::Info),
//!     Some(Arc::new(FlexFormatter::from_format_str("LEVEL NAME MESSAGE"))),
//!     None,
//! );
//!
//! let net = registry.get_logger("Net");
//! net.info("connected");
//! net.log(LogLevel::Debug, || format!("{} bytes buffered", 512)); // not evaluated
//! ```

pub mod config;
pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

use std::sync::{Arc, OnceLock};

pub mod prelude {
    pub use crate::config::{LoggingConfig, ScopeConfig};
    pub use crate::core::{
        CallSite, DateFormat, Formatter, LogLevel, LogRegistry, LogSelector, Logger,
        LoggerBuilder, LoggerConfiguration, LoggerError, Result, Sink, ROOT_CONFIGURATION_NAME,
        SHARED_LOGGER_NAME,
    };
    pub use crate::formatters::{FlexFormatter, FlexPart, QuickFormat, QuickFormatter};
    pub use crate::sinks::{ConsoleSink, FileSink, SinkFactory};
}

pub use crate::config::{LoggingConfig, ScopeConfig};
pub use crate::core::{
    CallSite, DateFormat, Formatter, LogLevel, LogRegistry, LogSelector, Logger, LoggerBuilder,
    LoggerConfiguration, LoggerError, Result, Sink, DEFAULT_DATE_PATTERN,
    ROOT_CONFIGURATION_NAME, SHARED_LOGGER_NAME,
};
pub use crate::formatters::{FlexFormatter, FlexPart, QuickFormat, QuickFormatter};
pub use crate::sinks::{ConsoleSink, FileSink, SinkFactory};

static REGISTRY: OnceLock<LogRegistry> = OnceLock::new();

/// The process-wide registry behind the free functions below.
///
/// Created on first use from the default configuration document, see
/// [`LoggingConfig::default_path`].
pub fn registry() -> &'static LogRegistry {
    REGISTRY.get_or_init(LogRegistry::load)
}

/// Shorthand for `registry().get_logger(name)`
pub fn get_logger(name: &str) -> Arc<Logger> {
    registry().get_logger(name)
}

/// Shorthand for `registry().configure_logger(..)`
pub fn configure_logger(
    name: &str,
    level: Option<LogLevel>,
    formatter: Option<Arc<dyn Formatter>>,
    sink: Option<Arc<dyn Sink>>,
) {
    registry().configure_logger(name, level, formatter, sink);
}

pub fn disable_logging() {
    registry().disable_logging();
}

pub fn enable_logging() {
    registry().enable_logging();
}

/// Log through the shared logger of [`registry()`], building the message only
/// when it will be written.
///
/// The level shortcuts below take a ready-made message; for lazy messages
/// with a call site, use the logging macros on `registry()`.
///
/// ```
/// use rust_named_logger::LogLevel;
///
/// rust_named_logger::log(LogLevel::Debug, || format!("{} items queued", 3));
/// rust_named_logger::info!(rust_named_logger::registry(), "{} workers", 4);
/// ```
pub fn log<F, S>(level: LogLevel, message: F)
where
    F: FnOnce() -> S,
    S: Into<String>,
{
    registry().log(level, message);
}

pub fn trace(message: impl Into<String>) {
    registry().trace(message);
}

pub fn debug(message: impl Into<String>) {
    registry().debug(message);
}

pub fn info(message: impl Into<String>) {
    registry().info(message);
}

pub fn warn(message: impl Into<String>) {
    registry().warn(message);
}

pub fn error(message: impl Into<String>) {
    registry().error(message);
}

pub fn severe(message: impl Into<String>) {
    registry().severe(message);
}
