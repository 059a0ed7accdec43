//! File logging example
//!
//! Demonstrates logging to both console and file sinks, and several loggers
//! sharing one file.
//!
//! Run with: cargo run --example file_logging

use rust_named_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Named Logger - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("rust_named_logger_demo");
    let registry = LogRegistry::with_sink_factory(Arc::new(SinkFactory::with_default_dir(&log_dir)));
    let file = registry.file_sink("application.log");
    if !file.is_open() {
        return Err(LoggerError::file_sink(
            file.path().display().to_string(),
            "could not be opened",
        ));
    }

    // The root configuration takes a date pattern and a second sink
    let formatter = Arc::new(QuickFormatter::new(QuickFormat::All));
    formatter.set_date_format(DateFormat::new("HH:mm:ss.SSS"));
    registry.configure_root(
        &LoggerConfiguration::new(ROOT_CONFIGURATION_NAME).with_formatter(formatter),
    );

    println!("1. Logging to both console and file:");
    for name in ["App", "Db"] {
        registry.configure_logger(name, Some(LogLevel::Debug), None, Some(file.clone()));
    }
    let app = registry.get_logger("App");
    let db = registry.get_logger("Db");

    app.info("Application started");
    app.debug("Loading configuration...");
    db.info("Connecting to database...");
    db.info("Database connection established");
    app.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        app.info(format!("Processing item {}/5", i));
        if i == 3 {
            db.warn("Item 3 took longer than expected");
        }
    }

    registry.flush();
    println!("\n3. Log file contents ({}):", file.path().display());
    let content = std::fs::read_to_string(file.path())
        .map_err(|e| LoggerError::io_operation("reading log file", file.path().display().to_string(), e))?;
    for line in content.lines() {
        println!("   {}", line);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
