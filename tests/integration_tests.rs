//! Integration tests for the named logger
//!
//! These tests verify:
//! - Configuration carry-over between repeated configure calls
//! - File sink sharing across loggers
//! - Global enable/disable and selector rules
//! - Configuration documents applied to a registry
//! - Formatter layouts end to end

use parking_lot::Mutex;
use rust_named_logger::config::LoggingConfig;
use rust_named_logger::core::{LogLevel, LogRegistry, Logger, Sink};
use rust_named_logger::formatters::{FlexFormatter, QuickFormat, QuickFormatter};
use rust_named_logger::sinks::SinkFactory;
use rust_named_logger::{info, warn, SHARED_LOGGER_NAME};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Default)]
struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
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

fn isolated_registry() -> (LogRegistry, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let factory = Arc::new(SinkFactory::with_default_dir(temp_dir.path()));
    (LogRegistry::with_sink_factory(factory), temp_dir)
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_configure_level_then_sink_keeps_level() {
    let (registry, temp_dir) = isolated_registry();
    let file_sink = registry.file_sink("x.log");

    registry.configure_logger("X", Some(LogLevel::Warn), None, None);
    registry.configure_logger(
        "X",
        None,
        Some(Arc::new(QuickFormatter::new(QuickFormat::LevelMessage))),
        Some(file_sink.clone()),
    );

    let x = registry.get_logger("X");
    assert_eq!(x.level(), LogLevel::Warn);

    let sinks = x.sinks();
    assert_eq!(sinks.len(), 1);
    assert_eq!(sinks[0].describe(), file_sink.describe());

    x.info("below threshold");
    x.warn("written");
    assert_eq!(read_lines(&temp_dir.path().join("x.log")), vec!["WARN: written"]);
}

#[test]
fn test_live_logger_updated_in_place() {
    let (registry, _temp_dir) = isolated_registry();
    let sink = Arc::new(MemorySink::default());
    let logger = registry.get_logger("Live");

    registry.configure_logger(
        "Live",
        Some(LogLevel::Error),
        Some(Arc::new(FlexFormatter::from_format_str("NAME LEVEL MESSAGE"))),
        Some(sink.clone()),
    );

    logger.warn("dropped");
    logger.error("kept");
    assert_eq!(sink.lines(), vec!["Live ERROR: kept"]);
}

#[test]
fn test_file_sink_shared_between_loggers() {
    let (registry, temp_dir) = isolated_registry();
    let first = registry.file_sink("shared.log");
    let second = registry.file_sink(temp_dir.path().join("shared.log").to_str().unwrap());
    assert!(Arc::ptr_eq(&first, &second));

    let formatter = Arc::new(QuickFormatter::new(QuickFormat::NameMessage));
    registry.configure_logger("A", None, Some(formatter.clone()), Some(first));
    registry.configure_logger("B", None, Some(formatter), Some(second));

    let a = registry.get_logger("A");
    let b = registry.get_logger("B");
    a.info("one");
    b.info("two");
    a.info("three");

    assert_eq!(
        read_lines(&temp_dir.path().join("shared.log")),
        vec!["A: one", "B: two", "A: three"]
    );
}

#[test]
fn test_disable_logging_covers_existing_and_new_loggers() {
    let (registry, _temp_dir) = isolated_registry();
    let sink = Arc::new(MemorySink::default());
    registry.configure_root(
        &rust_named_logger::LoggerConfiguration::new("ROOT").with_sink(sink.clone()),
    );

    let existing = registry.get_logger("Existing");
    registry.disable_logging();
    let fresh = registry.get_logger("Fresh");

    existing.severe("no");
    fresh.severe("no");
    registry.severe("no");
    assert!(sink.lines().is_empty());

    registry.enable_logging();
    existing.info("yes");
    fresh.info("yes");
    assert_eq!(sink.lines().len(), 2);
}

#[test]
fn test_enable_logging_respects_selector() {
    let (registry, _temp_dir) = isolated_registry();
    registry.set_selector(Some("Net,Db"), None);

    let net = registry.get_logger("Net");
    let ui = registry.get_logger("Ui");
    registry.disable_logging();
    registry.enable_logging();

    assert!(net.is_enabled());
    assert!(!ui.is_enabled());

    registry.set_selector(Some(""), Some("Net"));
    assert!(!net.is_enabled());
    assert!(ui.is_enabled());
}

#[test]
fn test_config_document_applied_to_registry() {
    let (registry, temp_dir) = isolated_registry();
    let document = r#"
level = "INFO"
quick_format = "LevelNameMessage"
disable = "Noise"

[Net]
level = "WARN"
flex_format = "LEVEL NAME MESSAGE"
location = "file"
location_filename = "net.log"

[Db]
quick_format = "MessageOnly"
"#;
    let config = LoggingConfig::from_toml_str(document).expect("valid document");
    registry.apply_config(&config);

    let net = registry.get_logger("Net");
    assert_eq!(net.level(), LogLevel::Warn);
    assert_eq!(net.formatter().describe(), "FlexFormatter with LEVEL NAME MESSAGE");
    net.info("dropped");
    net.error("timeout");
    assert_eq!(read_lines(&temp_dir.path().join("net.log")), vec!["ERROR Net: timeout"]);

    let db = registry.get_logger("Db");
    assert_eq!(db.level(), LogLevel::Info);
    assert_eq!(db.formatter().describe(), "QuickFormatter format=MessageOnly");

    let other = registry.get_logger("Other");
    assert_eq!(other.formatter().describe(), "QuickFormatter format=LevelNameMessage");
    assert!(!registry.get_logger("Noise").is_enabled());
}

#[test]
fn test_config_file_with_unusable_values_falls_back() {
    let (registry, temp_dir) = isolated_registry();
    let path = temp_dir.path().join("logging.toml");
    fs::write(
        &path,
        r#"
[Odd]
level = "LOUD"
quick_format = "Fancy"
location = "pigeon"
"#,
    )
    .unwrap();

    registry.load_config_file(&path);
    let odd = registry.get_logger("Odd");
    assert_eq!(odd.level(), LogLevel::Trace);
    assert_eq!(odd.formatter().describe(), "QuickFormatter format=All");
    assert_eq!(odd.sinks()[0].describe(), "ConsoleSink");

    // an unreadable document leaves the registry as it was
    registry.load_config_file(&temp_dir.path().join("missing.toml"));
    assert_eq!(registry.get_logger("Odd").level(), LogLevel::Trace);
}

#[test]
fn test_shared_logger_and_macros() {
    let (registry, _temp_dir) = isolated_registry();
    let sink = Arc::new(MemorySink::default());
    registry.configure_logger(SHARED_LOGGER_NAME, Some(LogLevel::Info), None, Some(sink.clone()));

    registry.debug("hidden");
    info!(registry, "ready in {}ms", 12);
    warn!(registry.get_logger(SHARED_LOGGER_NAME), "careful");

    assert_eq!(sink.lines(), vec!["INFO: ready in 12ms", "WARN: careful"]);
}

#[test]
fn test_registered_logger_replaces_lookup_entry() {
    let (registry, _temp_dir) = isolated_registry();
    let sink = Arc::new(MemorySink::default());
    registry.get_logger("Custom");

    let custom = Logger::builder("Custom")
        .level(LogLevel::Debug)
        .formatter(Arc::new(QuickFormatter::new(QuickFormat::MessageOnly)))
        .sink(sink.clone())
        .build();
    registry.register(custom);

    registry.get_logger("Custom").debug("via registry");
    assert_eq!(sink.lines(), vec!["via registry"]);
}

#[test]
fn test_unopenable_file_sink_is_inert() {
    let (registry, temp_dir) = isolated_registry();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let sink = registry.file_sink(blocker.join("app.log").to_str().unwrap());
    assert!(!sink.is_open());

    let memory = Arc::new(MemorySink::default());
    let logger = Logger::builder("Inert")
        .formatter(Arc::new(QuickFormatter::new(QuickFormat::MessageOnly)))
        .sink(sink)
        .sink(memory.clone())
        .build();
    logger.info("still delivered");
    assert_eq!(memory.lines(), vec!["still delivered"]);
}

#[test]
fn test_shutdown_flushes_and_silences() {
    let (registry, temp_dir) = isolated_registry();
    let file_sink = registry.file_sink("final.log");
    registry.configure_logger(
        "Final",
        None,
        Some(Arc::new(QuickFormatter::new(QuickFormat::MessageOnly))),
        Some(file_sink),
    );

    let logger = registry.get_logger("Final");
    logger.info("last words");
    registry.shutdown();
    logger.info("after shutdown");

    assert_eq!(read_lines(&temp_dir.path().join("final.log")), vec!["last words"]);
}

#[test]
fn test_registered_logger_keeps_settings_across_documents() {
    let (registry, temp_dir) = isolated_registry();
    let custom = Logger::builder("Custom")
        .level(LogLevel::Error)
        .formatter(Arc::new(QuickFormatter::new(QuickFormat::MessageOnly)))
        .sink(registry.file_sink("custom.log"))
        .build();
    registry.register(custom);

    let document = r#"
disable = "Noise"

[Other]
level = "DEBUG"
quick_format = "NameMessage"
"#;
    registry.apply_config(&LoggingConfig::from_toml_str(document).expect("valid document"));

    let custom = registry.get_logger("Custom");
    assert_eq!(custom.level(), LogLevel::Error);
    assert_eq!(custom.formatter().describe(), "QuickFormatter format=MessageOnly");
    assert_eq!(custom.sinks().len(), 1);

    custom.warn("below threshold");
    custom.error("kept");
    assert_eq!(read_lines(&temp_dir.path().join("custom.log")), vec!["kept"]);
}
