//! Configuration file example
//!
//! Demonstrates driving levels, layouts, destinations and selector rules from
//! a TOML document.
//!
//! Run with: cargo run --example config_file

use rust_named_logger::prelude::*;
use std::sync::Arc;

const DOCUMENT: &str = r#"
level = "DEBUG"
quick_format = "LevelNameMessage"
disable = "Chatty"

[Net]
level = "WARN"
flex_format = "DATE LEVEL NAME MESSAGE"
date_format = "HH:mm:ss"
location = "console file"
location_filename = "net.log"
"#;

fn main() -> Result<()> {
    println!("=== Rust Named Logger - Configuration File Example ===\n");

    let dir = std::env::temp_dir().join("rust_named_logger_config_demo");
    std::fs::create_dir_all(&dir)
        .map_err(|e| LoggerError::io_operation("creating demo directory", dir.display().to_string(), e))?;
    let path = dir.join("named_logger.toml");
    std::fs::write(&path, DOCUMENT)
        .map_err(|e| LoggerError::io_operation("writing demo config", path.display().to_string(), e))?;

    let config = LoggingConfig::load_from(&path)?;
    println!("1. Loaded {} named scope(s) from {}", config.loggers.len(), path.display());

    let registry = LogRegistry::with_sink_factory(Arc::new(SinkFactory::with_default_dir(&dir)));
    registry.apply_config(&config);

    println!("\n2. Resolved configurations:");
    for name in ["Net", "App", "Chatty"] {
        println!("   {}", registry.configuration_for(name));
    }

    println!("\n3. Logging:");
    let net = registry.get_logger("Net");
    net.info("Below WARN (hidden)");
    net.warn("Link is slow");

    registry.get_logger("App").debug("Root scope allows DEBUG");
    registry.get_logger("Chatty").severe("Disabled by selector (hidden)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
