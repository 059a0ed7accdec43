//! Logging macros for ergonomic log message formatting.
//!
//! These macros build the message with `format!` only when the level gate
//! passes, and record the call site (`file!()`, `line!()`, `module_path!()`)
//! for formatters that print it.
//!
//! The target may be a [`Logger`](crate::Logger) or a
//! [`LogRegistry`](crate::LogRegistry); a registry logs through its shared
//! logger.
//!
//! # Examples
//!
//! ```
//! use rust_named_logger::prelude::*;
//! use rust_named_logger::info;
//!
//! let registry = LogRegistry::new();
//! let logger = registry.get_logger("Server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Through the registry's shared logger
//! info!(registry, "{} loggers live", registry.logger_names().len());
//! ```

/// The [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!(), module_path!())
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::builder("Doc").build();
/// use rust_named_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($target:expr, $level:expr, $($arg:tt)+) => {
        $target.log_at($level, $crate::call_site!(), || format!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::builder("Doc").level(LogLevel::Trace).build();
/// use rust_named_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::builder("Doc").build();
/// use rust_named_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a severe-level message.
///
/// # Examples
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::builder("Doc").build();
/// use rust_named_logger::severe;
/// severe!(logger, "Critical system failure");
/// severe!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! severe {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Severe, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger, Sink};
    use crate::formatters::FlexFormatter;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct MemorySink {
        lines: Mutex<Vec<String>>,
    }

    impl Sink for MemorySink {
        fn write(&self, message: &str) {
            self.lines.lock().push(message.to_string());
        }
        fn enable(&self) {}
        fn disable(&self) {}
        fn is_enabled(&self) -> bool {
            true
        }
        fn describe(&self) -> String {
            "MemorySink".to_string()
        }
    }

    fn logger(level: LogLevel, tokens: &str) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        let logger = Logger::builder("Macro")
            .level(level)
            .formatter(Arc::new(FlexFormatter::from_format_str(tokens)))
            .sink(sink.clone())
            .build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger(LogLevel::Trace, "LEVEL MESSAGE");
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert_eq!(
            *sink.lines.lock(),
            vec!["INFO: Test message".to_string(), "INFO: Formatted: 42".to_string()]
        );
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger(LogLevel::Trace, "LEVEL MESSAGE");
        trace!(logger, "t");
        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, "e");
        severe!(logger, "s {}", 1);
        assert_eq!(
            *sink.lines.lock(),
            vec!["TRACE: t", "DEBUG: d", "INFO: i", "WARN: w", "ERROR: e", "SEVERE: s 1"]
        );
    }

    #[test]
    fn test_macros_record_call_site() {
        let (logger, sink) = logger(LogLevel::Trace, "LINE FUNC MESSAGE");
        let line = line!() + 1;
        info!(logger, "located");
        assert_eq!(
            sink.lines.lock()[0],
            format!("[macros.rs:{}] [{}]: located", line, module_path!())
        );
    }

    #[test]
    fn test_macro_arguments_not_evaluated_below_level() {
        let (logger, sink) = logger(LogLevel::Error, "MESSAGE");
        let evaluations = AtomicUsize::new(0);
        let expensive = || {
            evaluations.fetch_add(1, Ordering::SeqCst);
            "value"
        };

        debug!(logger, "{}", expensive());
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);
        error!(logger, "{}", expensive());
        assert_eq!(evaluations.load(Ordering::SeqCst), 1);
        assert_eq!(sink.lines.lock().len(), 1);
    }
}
