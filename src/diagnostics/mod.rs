//! Diagnostics module for ABC validation
//!
//! Collects diagnostics from the notation engine's parser and analyzer and
//! maps their character offsets to editor line/column positions. Slurs get
//! an extra local check that works without the engine.

pub mod slurs;

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::parse::TokenRange;

/// Severity level for diagnostics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

impl DiagnosticSeverity {
    /// Parse an engine severity string; unknown values are `Info`
    pub fn from_engine(severity: &str) -> Self {
        match severity.to_ascii_lowercase().as_str() {
            "error" => DiagnosticSeverity::Error,
            "warning" | "warn" => DiagnosticSeverity::Warning,
            _ => DiagnosticSeverity::Info,
        }
    }
}

/// Secondary location attached to an engine diagnostic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticLabel {
    pub range: TokenRange,
    pub message: String,
}

/// Diagnostic as reported by the notation engine
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExternalDiagnostic {
    pub code: String,
    pub severity: String,
    pub range: TokenRange,
    pub message: String,
    #[serde(default)]
    pub labels: Vec<DiagnosticLabel>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Diagnostic positioned for the editor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Zero-based line
    pub line: usize,
    /// Zero-based column within the line
    pub column: usize,
    /// Start offset in the whole source (characters)
    pub start_col: usize,
    /// End offset in the whole source (characters)
    pub end_col: usize,
    pub severity: DiagnosticSeverity,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    pub fn from_external(source: &str, diagnostic: &ExternalDiagnostic) -> Self {
        let (line, column) = line_col(source, diagnostic.range.start);
        Self {
            line,
            column,
            start_col: diagnostic.range.start,
            end_col: diagnostic.range.end,
            severity: DiagnosticSeverity::from_engine(&diagnostic.severity),
            code: diagnostic.code.clone(),
            message: diagnostic.message.clone(),
        }
    }
}

/// Line and column of a character offset
///
/// Offsets past the end resolve to the position after the last character.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;

    for c in source.chars().take(offset) {
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    (line, col)
}

/// Validate `source` with the engine, sorted by start offset
///
/// An engine that is not ready or fails yields no diagnostics.
pub fn validate(engine: &Engine, source: &str) -> Vec<ValidationError> {
    let diagnostics = match engine.diagnostics(source) {
        Ok(diagnostics) => diagnostics,
        Err(err) => {
            log::warn!("validation skipped: {}", err);
            return Vec::new();
        }
    };

    let mut errors: Vec<ValidationError> = diagnostics
        .iter()
        .map(|diagnostic| ValidationError::from_external(source, diagnostic))
        .collect();
    errors.sort_by_key(|error| error.start_col);
    errors
}
