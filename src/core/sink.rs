//! Sink trait for log output destinations

/// Destination for rendered log lines.
///
/// Sinks are shared between loggers (`Arc<dyn Sink>`), so every method takes
/// `&self`. `write` never reports failure: a sink that cannot write drops the
/// message. A disabled sink drops messages too; nothing is buffered for later.
pub trait Sink: Send + Sync {
    fn write(&self, message: &str);
    fn enable(&self);
    fn disable(&self);
    fn is_enabled(&self) -> bool;
    fn describe(&self) -> String;

    /// Push anything the sink holds onto durable storage
    fn flush(&self) {}
}
