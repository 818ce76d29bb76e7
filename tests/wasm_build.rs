//! WASM build test
//!
//! Exercises the JavaScript-facing exports in a browser.

#![cfg(target_arch = "wasm32")]

use abc_highlight_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_highlight_export() {
    assert_eq!(highlight_abc("A"), "<span class=\"abc-note\">A</span>");
}

#[wasm_bindgen_test]
fn test_highlighter_without_engine() {
    let highlighter = AbcHighlighter::new(JsValue::UNDEFINED).unwrap();
    assert!(!highlighter.is_engine_ready());
    assert_eq!(highlighter.highlight("|:"), "<span class=\"abc-bar\">|:</span>");
}

#[wasm_bindgen_test]
fn test_invalid_token_stream_is_escaped() {
    assert_eq!(highlight_abc_tokens("<A>", JsValue::from_str("nope")), "&lt;A&gt;");
}

#[wasm_bindgen_test]
fn test_classify_export() {
    let spans = classify_abc("A2").unwrap();
    assert!(js_sys::Array::is_array(&spans));
    assert_eq!(js_sys::Array::from(&spans).length(), 2);
}

#[wasm_bindgen_test]
fn test_engine_attaches_once() {
    let highlighter = AbcHighlighter::new(JsValue::NULL).unwrap();
    let tokenize = js_sys::Function::new_with_args("code", "return [];");
    assert!(highlighter.attach_engine(tokenize.clone(), None, None).is_ok());
    assert!(highlighter.is_engine_ready());
    assert!(highlighter.attach_engine(tokenize, None, None).is_err());
    assert_eq!(highlighter.highlight("A"), "A");
}
