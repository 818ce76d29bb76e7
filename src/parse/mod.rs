//! Parsing module for the ABC highlighter
//!
//! This module turns ABC source text into classified spans, either with the
//! built-in character scanner or by mapping a token stream produced by an
//! external notation engine.

pub mod patterns;
pub mod scanner;
pub mod tokens;

// Re-export commonly used types
pub use scanner::*;
pub use tokens::*;
