//! ABC syntax highlighter
//!
//! The [`Highlighter`] owns one [`Classifier`] chosen at construction time:
//! the built-in [`CharacterScanner`], or a [`TokenStreamClassifier`] that
//! delegates to an external notation engine once it is ready. Whatever the
//! back end, highlighting never fails: a classifier error degrades to the
//! escaped source text.

use std::rc::Rc;

use crate::config::HighlightConfig;
use crate::engine::{Engine, EngineError};
use crate::models::Span;
use crate::parse::{scan_source, spans_from_tokens, ExternalToken};
use crate::renderers::{escape_html, render_spans, ClassMap};

/// Strategy that splits source text into classified spans
pub trait Classifier {
    fn name(&self) -> &'static str;

    fn classify(&self, source: &str) -> Result<Vec<Span>, EngineError>;
}

/// Hand-written scanner, always available
#[derive(Clone, Copy, Debug, Default)]
pub struct CharacterScanner;

impl Classifier for CharacterScanner {
    fn name(&self) -> &'static str {
        "scanner"
    }

    fn classify(&self, source: &str) -> Result<Vec<Span>, EngineError> {
        Ok(scan_source(source))
    }
}

/// Classifier that maps the external engine's tokens
///
/// Falls back to the character scanner while the engine is not ready.
pub struct TokenStreamClassifier {
    engine: Rc<Engine>,
}

impl TokenStreamClassifier {
    pub fn new(engine: Rc<Engine>) -> Self {
        Self { engine }
    }
}

impl Classifier for TokenStreamClassifier {
    fn name(&self) -> &'static str {
        "engine"
    }

    fn classify(&self, source: &str) -> Result<Vec<Span>, EngineError> {
        if !self.engine.is_ready() {
            log::debug!("engine not ready, using character scanner");
            return CharacterScanner.classify(source);
        }

        let tokens = self.engine.tokenize(source)?;
        spans_from_tokens(source, &tokens)
    }
}

pub struct Highlighter {
    classifier: Box<dyn Classifier>,
    classes: ClassMap,
}

impl Highlighter {
    /// Highlighter using the character scanner
    pub fn new(config: &HighlightConfig) -> Self {
        Self::with_classifier(Box::new(CharacterScanner), config)
    }

    pub fn with_classifier(classifier: Box<dyn Classifier>, config: &HighlightConfig) -> Self {
        Self {
            classifier,
            classes: ClassMap::new(config),
        }
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }

    /// Render `source` as highlighted markup
    pub fn highlight(&self, source: &str) -> String {
        match self.classifier.classify(source) {
            Ok(spans) => render_spans(source, &spans, &self.classes),
            Err(err) => {
                log::warn!("{} classifier failed, showing plain text: {}", self.classifier.name(), err);
                escape_html(source)
            }
        }
    }

    /// Classified spans of `source`
    ///
    /// A failing classifier yields a single unwrapped span over the source.
    pub fn highlight_spans(&self, source: &str) -> Vec<Span> {
        self.classifier.classify(source).unwrap_or_else(|err| {
            log::warn!("{} classifier failed: {}", self.classifier.name(), err);
            if source.is_empty() {
                Vec::new()
            } else {
                vec![Span::plain(0..source.len())]
            }
        })
    }

    /// Render `source` from tokens supplied by the caller
    pub fn highlight_tokens(&self, source: &str, tokens: &[ExternalToken]) -> String {
        match spans_from_tokens(source, tokens) {
            Ok(spans) => render_spans(source, &spans, &self.classes),
            Err(err) => {
                log::warn!("ignoring tokens: {}", err);
                escape_html(source)
            }
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

/// Highlight with the character scanner and the default class names
pub fn highlight(source: &str) -> String {
    Highlighter::default().highlight(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AbcEngine;

    struct FailingEngine;

    impl AbcEngine for FailingEngine {
        fn tokenize(&self, _source: &str) -> Result<Vec<ExternalToken>, EngineError> {
            Err(EngineError::Failed("wasm trap".to_string()))
        }
    }

    struct WholeLineEngine;

    impl AbcEngine for WholeLineEngine {
        fn tokenize(&self, source: &str) -> Result<Vec<ExternalToken>, EngineError> {
            Ok(vec![ExternalToken::new("comment", 0, source.chars().count())])
        }
    }

    fn engine_highlighter(engine: Option<Box<dyn AbcEngine>>) -> Highlighter {
        let handle = Rc::new(Engine::new());
        if let Some(engine) = engine {
            handle.initialize(engine).unwrap();
        }
        Highlighter::with_classifier(
            Box::new(TokenStreamClassifier::new(handle)),
            &HighlightConfig::default(),
        )
    }

    #[test]
    fn test_highlight_empty() {
        assert_eq!(highlight(""), "");
    }

    #[test]
    fn test_not_ready_engine_uses_scanner() {
        let highlighter = engine_highlighter(None);
        assert_eq!(highlighter.classifier_name(), "engine");
        assert_eq!(highlighter.highlight("A2"), highlight("A2"));
    }

    #[test]
    fn test_failing_engine_returns_escaped_source() {
        let highlighter = engine_highlighter(Some(Box::new(FailingEngine)));
        assert_eq!(highlighter.highlight("A<B"), "A&lt;B");
        assert_eq!(highlighter.highlight_spans("A<B"), vec![Span::plain(0..3)]);
    }

    #[test]
    fn test_ready_engine_is_used() {
        let highlighter = engine_highlighter(Some(Box::new(WholeLineEngine)));
        assert_eq!(
            highlighter.highlight("|A|"),
            "<span class=\"abc-comment\">|A|</span>"
        );
    }

    #[test]
    fn test_malformed_caller_tokens() {
        let highlighter = Highlighter::default();
        let tokens = vec![ExternalToken::new("note", 0, 9)];
        assert_eq!(highlighter.highlight_tokens("A&", &tokens), "A&amp;");
    }

    #[test]
    fn test_zero_length_tokens_keep_text_once() {
        let highlighter = Highlighter::default();
        let tokens = vec![ExternalToken::new("note", 1, 1), ExternalToken::new("note", 1, 2)];
        assert_eq!(
            highlighter.highlight_tokens("AB", &tokens),
            "A<span class=\"abc-note\">B</span>"
        );
    }
}
