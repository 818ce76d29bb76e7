//! External notation engine handle
//!
//! The editor can load a full ABC engine (tokenizer, parser, analyzer) next
//! to this module. The engine needs a one-time setup before it can be used,
//! so it lives behind an explicit [`Engine`] handle that starts out not
//! ready. Callers check [`Engine::is_ready`] before delegating to it.

pub mod js;

use once_cell::unsync::OnceCell;
use thiserror::Error;

use crate::diagnostics::ExternalDiagnostic;
use crate::parse::ExternalToken;

pub use js::JsEngine;

/// Failures coming from the external engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Engine has not been set up yet
    #[error("notation engine is not initialized")]
    NotReady,

    /// `initialize` was called twice
    #[error("notation engine is already initialized")]
    AlreadyInitialized,

    /// One of the engine's calls raised an error
    #[error("notation engine failed: {0}")]
    Failed(String),

    /// The engine returned data we cannot use
    #[error("malformed engine output: {0}")]
    Malformed(String),
}

/// Operations the highlighter needs from a notation engine
pub trait AbcEngine {
    /// Tokenize the whole source into `{kind, range}` records
    fn tokenize(&self, source: &str) -> Result<Vec<ExternalToken>, EngineError>;

    /// Parser and analyzer diagnostics for the source
    fn diagnostics(&self, _source: &str) -> Result<Vec<ExternalDiagnostic>, EngineError> {
        Ok(Vec::new())
    }
}

/// Handle to an engine that is set up at most once
#[derive(Default)]
pub struct Engine {
    inner: OnceCell<Box<dyn AbcEngine>>,
}

impl Engine {
    /// Create a handle in the "not ready" state
    pub fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    /// Install the engine; only the first call succeeds
    pub fn initialize(&self, engine: Box<dyn AbcEngine>) -> Result<(), EngineError> {
        self.inner
            .set(engine)
            .map_err(|_| EngineError::AlreadyInitialized)?;
        log::info!("notation engine ready");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.inner.get().is_some()
    }

    fn ready(&self) -> Result<&dyn AbcEngine, EngineError> {
        self.inner
            .get()
            .map(|engine| engine.as_ref())
            .ok_or(EngineError::NotReady)
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<ExternalToken>, EngineError> {
        self.ready()?.tokenize(source)
    }

    pub fn diagnostics(&self, source: &str) -> Result<Vec<ExternalDiagnostic>, EngineError> {
        self.ready()?.diagnostics(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoteTokenizer;

    impl AbcEngine for NoteTokenizer {
        fn tokenize(&self, source: &str) -> Result<Vec<ExternalToken>, EngineError> {
            Ok(vec![ExternalToken::new("note", 0, source.chars().count())])
        }
    }

    #[test]
    fn test_engine_starts_not_ready() {
        let engine = Engine::new();
        assert!(!engine.is_ready());
        assert_eq!(engine.tokenize("A"), Err(EngineError::NotReady));
        assert_eq!(engine.diagnostics("A"), Err(EngineError::NotReady));
    }

    #[test]
    fn test_engine_initializes_once() {
        let engine = Engine::new();
        assert!(engine.initialize(Box::new(NoteTokenizer)).is_ok());
        assert!(engine.is_ready());
        assert_eq!(
            engine.initialize(Box::new(NoteTokenizer)),
            Err(EngineError::AlreadyInitialized)
        );

        let tokens = engine.tokenize("AB").unwrap();
        assert_eq!(tokens, vec![ExternalToken::new("note", 0, 2)]);
        assert!(engine.diagnostics("AB").unwrap().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::Failed("wasm trap".to_string()).to_string(),
            "notation engine failed: wasm trap"
        );
        assert_eq!(
            EngineError::Malformed("token 'note' overlaps".to_string()).to_string(),
            "malformed engine output: token 'note' overlaps"
        );
    }
}
