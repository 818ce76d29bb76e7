//! Renderers for classified spans
//!
//! Turns spans into HTML-like markup for the editor overlay.

pub mod html;

pub use html::*;
