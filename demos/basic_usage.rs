//! Basic logger usage example
//!
//! Demonstrates named loggers from a registry, level thresholds and the
//! logging macros.
//!
//! Run with: cargo run --example basic_usage

use rust_named_logger::prelude::*;
use rust_named_logger::{debug, info, severe};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Named Logger - Basic Usage Example ===\n");

    let registry = LogRegistry::new();

    // Every logger starts from the root configuration: TRACE, full layout, console
    println!("1. Logging at different levels:");
    let app = registry.get_logger("App");
    app.trace("This is a trace message");
    app.debug("This is a debug message");
    app.info("This is an info message");
    app.warn("This is a warning message");
    app.error("This is an error message");
    app.severe("This is a severe message");

    println!("\n2. Per-logger configuration:");
    registry.configure_logger(
        "Net",
        Some(LogLevel::Info),
        Some(Arc::new(FlexFormatter::from_format_str("LEVEL NAME LINE MESSAGE"))),
        None,
    );
    let net = registry.get_logger("Net");
    debug!(net, "Handshake bytes: {:?}", [0x16, 0x03, 0x01]); // hidden
    info!(net, "Connected to {}:{}", "example.org", 443);

    println!("\n3. Lazy messages are only built when written:");
    net.log(LogLevel::Trace, || {
        println!("   (never printed)");
        "expensive"
    });
    net.log(LogLevel::Warn, || format!("Retrying in {}s", 5));

    println!("\n4. Selector rules and the global switch:");
    registry.set_selector(None, Some("App"));
    app.severe("App is excluded (hidden)");
    net.warn("Net is still enabled");

    registry.disable_logging();
    severe!(net, "Logging is off (hidden)");
    registry.enable_logging();
    net.warn("Logging is back on");

    println!("\n5. Shared logger:");
    registry.info("Registry-level calls go to the shared logger");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
