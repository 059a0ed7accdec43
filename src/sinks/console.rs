//! Console sink implementation

use crate::core::Sink;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static CONSOLE: OnceLock<Arc<ConsoleSink>> = OnceLock::new();

/// Writes rendered lines to standard output.
///
/// There is exactly one console sink per process; obtain it with
/// [`ConsoleSink::instance`]. Disabling it affects every logger using it.
pub struct ConsoleSink {
    enabled: AtomicBool,
}

impl ConsoleSink {
    /// The process-wide console sink
    pub fn instance() -> Arc<ConsoleSink> {
        Arc::clone(CONSOLE.get_or_init(|| {
            Arc::new(ConsoleSink {
                enabled: AtomicBool::new(true),
            })
        }))
    }
}

impl Sink for ConsoleSink {
    fn write(&self, message: &str) {
        if !self.is_enabled() {
            return;
        }
        // Holding the lock keeps one message on one line under contention.
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", message);
    }

    fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn describe(&self) -> String {
        "ConsoleSink".to_string()
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}
