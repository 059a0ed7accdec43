//! Formatter implementations

pub mod flex;
pub mod quick;

pub use flex::{FlexFormatter, FlexPart};
pub use quick::{QuickFormat, QuickFormatter};

pub use crate::core::Formatter;
