//! Property-based tests for rust_named_logger using proptest

use proptest::prelude::*;
use rust_named_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct CountingSink {
    writes: AtomicUsize,
}

impl Sink for CountingSink {
    fn write(&self, _message: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
    fn enable(&self) {}
    fn disable(&self) {}
    fn is_enabled(&self) -> bool {
        true
    }
    fn describe(&self) -> String {
        "CountingSink".to_string()
    }
}

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Severe),
    ]
}

fn logger_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}"
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel names parse back to the same level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(LogLevel::parse(level.to_str()), level);
    }

    /// Test that ordering follows the numeric rank
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 < level2, level1.rank() < level2.rank());
        prop_assert_eq!(level1 == level2, level1.rank() == level2.rank());
    }

    /// Test that unknown names fall back to TRACE
    #[test]
    fn test_unknown_level_name_is_trace(name in "[a-z]{1,10}") {
        prop_assert_eq!(LogLevel::parse(&name), LogLevel::Trace);
    }
}

// ============================================================================
// Logger Gate Tests
// ============================================================================

proptest! {
    /// A logger writes exactly when the message level reaches its threshold
    #[test]
    fn test_level_gate(threshold in any_level(), level in any_level()) {
        let sink = Arc::new(CountingSink::default());
        let logger = Logger::builder("Gate")
            .level(threshold)
            .sink(sink.clone())
            .build();

        logger.log(level, || "message");

        let expected = usize::from(level.rank() >= threshold.rank());
        prop_assert_eq!(sink.writes.load(Ordering::SeqCst), expected);
        prop_assert_eq!(logger.is_loggable(level), expected == 1);
    }

    /// The message producer runs at most once, regardless of the sink count
    #[test]
    fn test_message_producer_runs_once(
        threshold in any_level(),
        level in any_level(),
        sink_count in 1usize..6,
    ) {
        let sink = Arc::new(CountingSink::default());
        let mut builder = Logger::builder("Lazy").level(threshold);
        for _ in 0..sink_count {
            builder = builder.sink(sink.clone());
        }
        let logger = builder.build();
        let calls = AtomicUsize::new(0);

        logger.log(level, || {
            calls.fetch_add(1, Ordering::SeqCst);
            "expensive"
        });

        let passes = level.rank() >= threshold.rank();
        prop_assert_eq!(calls.load(Ordering::SeqCst), usize::from(passes));
        prop_assert_eq!(
            sink.writes.load(Ordering::SeqCst),
            if passes { sink_count } else { 0 }
        );
    }
}

// ============================================================================
// LogSelector Tests
// ============================================================================

proptest! {
    /// With no rules every name is enabled
    #[test]
    fn test_empty_selector_enables_all(name in logger_name()) {
        prop_assert!(LogSelector::new().should_enable(&name));
        prop_assert!(LogSelector::with_rules(",,", ",").should_enable(&name));
    }

    /// Exclusion wins over inclusion
    #[test]
    fn test_exclude_wins(name in logger_name(), others in prop::collection::vec(logger_name(), 0..4)) {
        let mut names = others.clone();
        names.push(name.clone());
        let rule = names.join(",");
        prop_assert!(!LogSelector::with_rules(&rule, &rule).should_enable(&name));
        prop_assert!(!LogSelector::with_rules("", &rule).should_enable(&name));
    }

    /// A non-empty include list enables only its members
    #[test]
    fn test_include_list(included in prop::collection::vec(logger_name(), 1..4), name in logger_name()) {
        let selector = LogSelector::with_rules(&included.join(","), "");
        prop_assert_eq!(selector.should_enable(&name), included.contains(&name));
    }

    /// An exclude-only rule enables every name not listed
    #[test]
    fn test_exclude_only(excluded in prop::collection::vec(logger_name(), 1..4), name in logger_name()) {
        let selector = LogSelector::with_rules("", &excluded.join(","));
        prop_assert_eq!(selector.should_enable(&name), !excluded.contains(&name));
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Quick layouts without a date are fully determined by their inputs
    #[test]
    fn test_quick_formatter_layouts(
        name in logger_name(),
        level in any_level(),
        message in "[ -~]{0,40}",
    ) {
        let render = |layout| QuickFormatter::new(layout).format(&name, level, &message, None);

        prop_assert_eq!(render(QuickFormat::MessageOnly), message.clone());
        prop_assert_eq!(render(QuickFormat::LevelMessage), format!("{}: {}", level, message));
        prop_assert_eq!(render(QuickFormat::NameMessage), format!("{}: {}", name, message));
        prop_assert_eq!(
            render(QuickFormat::LevelNameMessage),
            format!("{} {}: {}", level, name, message)
        );
    }

    /// A colon precedes the message and location fields vanish without a call site
    #[test]
    fn test_flex_formatter_fields(
        name in logger_name(),
        level in any_level(),
        message in "[ -~]{0,40}",
    ) {
        let formatter = FlexFormatter::from_format_str("line level func name message");
        prop_assert_eq!(
            formatter.format(&name, level, &message, None),
            format!("{} {}: {}", level, name, message)
        );

        let site = CallSite::new("src/net/peer.rs", 42, "net::peer");
        prop_assert_eq!(
            formatter.format(&name, level, &message, Some(&site)),
            format!("[peer.rs:42] {} [net::peer] {}: {}", level, name, message)
        );
    }

    /// Unknown flex tokens render as the date
    #[test]
    fn test_unknown_flex_token_is_date(token in "[a-z]{3,8}") {
        prop_assume!(!["date", "name", "level", "message", "line", "func"].contains(&token.as_str()));
        let formatter = FlexFormatter::from_format_str(&token);
        prop_assert_eq!(formatter.parts(), &[FlexPart::Date][..]);
    }
}
