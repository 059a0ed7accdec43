//! Sink implementations

pub mod console;
pub mod factory;
pub mod file;

pub use console::ConsoleSink;
pub use factory::SinkFactory;
pub use file::FileSink;

pub use crate::core::Sink;
