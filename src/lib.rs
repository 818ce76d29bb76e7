//! ABC Notation Highlighter WASM Module
//!
//! Renders ABC music-notation source as syntax-highlighted HTML markup for
//! the editor overlay. The same crate builds as a native library.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod engine;
pub mod highlighter;
pub mod diagnostics;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use config::HighlightConfig;
pub use highlighter::{highlight, CharacterScanner, Classifier, Highlighter, TokenStreamClassifier};
pub use models::{Category, Span};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("logger was already initialized");
        }
    }

    log::info!("ABC highlighter WASM module initialized");
}
