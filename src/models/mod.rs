//! Models module for the ABC highlighter
//!
//! This module contains the data models produced by the scanner:
//! span categories, bar-line symbols and note durations.

pub mod category;
pub mod barlines;
pub mod duration;

// Re-export commonly used types
pub use category::*;
pub use barlines::BarlineType;
pub use duration::Duration;
