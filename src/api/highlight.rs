//! Highlighting exports
//!
//! Free functions cover the common case (default class names, character
//! scanner). `AbcHighlighter` adds configuration, an attachable notation
//! engine and validation.

use std::rc::Rc;

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, is_absent, serialize, to_js_error};
use crate::config::HighlightConfig;
use crate::diagnostics::{self, slurs::unmatched_slurs};
use crate::engine::{Engine, JsEngine};
use crate::highlighter::{Highlighter, TokenStreamClassifier};
use crate::models::{Category, Duration, Span};
use crate::parse::ExternalToken;
use crate::renderers::{escape_html, ClassMap};

/// Span as handed to JavaScript
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpanView {
    pub category: Option<Category>,
    pub class_name: Option<String>,
    pub text: String,
    /// Character offsets into the source, like token and diagnostic ranges
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slur_depth: Option<usize>,
    /// Length multiplier of duration spans, e.g. "3/2"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl SpanView {
    /// View of `span`, which begins `start` characters into `source`
    pub fn new(source: &str, span: &Span, start: usize, classes: &ClassMap) -> Self {
        let text = span.text(source);
        let duration = match span.category {
            Some(Category::Duration) => Duration::parse(text)
                .and_then(|duration| duration.value())
                .map(|value| value.to_string()),
            _ => None,
        };

        Self {
            category: span.category,
            class_name: classes.class_for(span).map(|class| class.into_owned()),
            text: text.to_string(),
            start,
            end: start + text.chars().count(),
            slur_depth: span.slur_depth,
            duration,
        }
    }
}

/// Spans of `source` as seen by JavaScript
pub fn span_views(source: &str, highlighter: &Highlighter) -> Vec<SpanView> {
    let mut position = 0;
    highlighter
        .highlight_spans(source)
        .iter()
        .map(|span| {
            let view = SpanView::new(source, span, position, highlighter.classes());
            position = view.end;
            view
        })
        .collect()
}

/// Highlight ABC source with the default class names
#[wasm_bindgen(js_name = highlightAbc)]
pub fn highlight_abc(code: &str) -> String {
    crate::highlighter::highlight(code)
}

/// Classified spans of ABC source
#[wasm_bindgen(js_name = classifyAbc)]
pub fn classify_abc(code: &str) -> Result<JsValue, JsValue> {
    serialize(&span_views(code, &Highlighter::default()), "Failed to serialize spans")
}

/// Highlight ABC source from tokens produced elsewhere
///
/// Tokens that cannot be decoded or do not fit the source give back the
/// escaped source.
#[wasm_bindgen(js_name = highlightAbcTokens)]
pub fn highlight_abc_tokens(code: &str, tokens: JsValue) -> String {
    match deserialize::<Vec<ExternalToken>>(tokens, "Invalid token stream") {
        Ok(tokens) => Highlighter::default().highlight_tokens(code, &tokens),
        Err(_) => escape_html(code),
    }
}

/// Unmatched slur brackets, line by line
#[wasm_bindgen(js_name = findUnmatchedSlurs)]
pub fn find_unmatched_slurs(code: &str) -> Result<JsValue, JsValue> {
    serialize(&unmatched_slurs(code), "Failed to serialize slur diagnostics")
}

/// Configurable highlighter with an optional notation engine
#[wasm_bindgen]
pub struct AbcHighlighter {
    engine: Rc<Engine>,
    highlighter: Highlighter,
}

#[wasm_bindgen]
impl AbcHighlighter {
    /// Create a highlighter; `config` may be omitted for the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AbcHighlighter, JsValue> {
        let config: HighlightConfig = if is_absent(&config) {
            HighlightConfig::default()
        } else {
            deserialize(config, "Invalid highlight config")?
        };

        let engine = Rc::new(Engine::new());
        let classifier = TokenStreamClassifier::new(Rc::clone(&engine));

        Ok(AbcHighlighter {
            highlighter: Highlighter::with_classifier(Box::new(classifier), &config),
            engine,
        })
    }

    /// Attach the notation engine's exported functions (once)
    #[wasm_bindgen(js_name = attachEngine)]
    pub fn attach_engine(
        &self,
        tokenize: Function,
        parse: Option<Function>,
        analyze: Option<Function>,
    ) -> Result<(), JsValue> {
        self.engine
            .initialize(Box::new(JsEngine::new(tokenize, parse, analyze)))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = isEngineReady)]
    pub fn is_engine_ready(&self) -> bool {
        self.engine.is_ready()
    }

    pub fn highlight(&self, code: &str) -> String {
        self.highlighter.highlight(code)
    }

    pub fn classify(&self, code: &str) -> Result<JsValue, JsValue> {
        serialize(&span_views(code, &self.highlighter), "Failed to serialize spans")
    }

    /// Engine diagnostics positioned by line and column
    pub fn validate(&self, code: &str) -> Result<JsValue, JsValue> {
        serialize(&diagnostics::validate(&self.engine, code), "Failed to serialize diagnostics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_views_carry_duration_values() {
        let views = span_views("A3/2B/", &Highlighter::default());
        let durations: Vec<Option<&str>> = views.iter().map(|v| v.duration.as_deref()).collect();
        assert_eq!(durations, vec![None, Some("3/2"), None, Some("1/2")]);
    }

    #[test]
    fn test_span_views_carry_classes() {
        let views = span_views("(A", &Highlighter::default());
        assert_eq!(views[0].class_name.as_deref(), Some("abc-slur abc-slur-level-0"));
        assert_eq!(views[0].slur_depth, Some(0));
        assert_eq!(views[1].class_name.as_deref(), Some("abc-note"));
        assert_eq!(views[1].start, 1);
        assert_eq!(views[1].end, 2);
    }

    #[test]
    fn test_span_views_use_character_offsets() {
        let source = "é|A";
        let views = span_views(source, &Highlighter::default());
        let ranges: Vec<(usize, usize)> = views.iter().map(|v| (v.start, v.end)).collect();
        assert_eq!(ranges, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(views[1].text, "|");

        let chars: Vec<char> = source.chars().collect();
        for view in &views {
            let sliced: String = chars[view.start..view.end].iter().collect();
            assert_eq!(sliced, view.text);
        }
    }

    #[test]
    fn test_highlight_abc_matches_highlighter() {
        assert_eq!(highlight_abc("K: C"), crate::highlighter::highlight("K: C"));
    }
}
