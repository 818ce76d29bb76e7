//! ABC highlighter WASM API
//!
//! This module provides the JavaScript-facing API for the highlighter.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization and error handling
//! - `highlight`: Highlighting, classification and validation exports

pub mod helpers;
pub mod highlight;

pub use highlight::*;
