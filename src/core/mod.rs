//! Core logger types and traits

pub mod call_site;
pub mod configuration;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod registry;
pub mod selector;
pub mod sink;
pub mod timestamp;

pub use call_site::CallSite;
pub use configuration::LoggerConfiguration;
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use registry::{LogRegistry, ROOT_CONFIGURATION_NAME, SHARED_LOGGER_NAME};
pub use selector::LogSelector;
pub use sink::Sink;
pub use timestamp::{DateFormat, DEFAULT_DATE_PATTERN};
