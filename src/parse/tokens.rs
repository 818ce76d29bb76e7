//! External token stream mapping
//!
//! A notation engine may hand us its own tokens as `{kind, range}` records.
//! Ranges count Unicode scalar values, the way the editor front end counts
//! characters. This module maps those tokens onto the same span model the
//! character scanner produces.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;
use crate::models::{Category, Span};

/// Character range of a token or diagnostic
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

/// Token as produced by an external notation engine
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExternalToken {
    pub kind: String,
    pub range: TokenRange,
}

impl ExternalToken {
    pub fn new(kind: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind: kind.into(),
            range: TokenRange { start, end },
        }
    }
}

/// Map an engine token kind to a span category
///
/// Kinds are compared case-insensitively with `_`, `-` and spaces removed,
/// so `BarLine`, `bar_line` and `bar-line` all match. Unknown kinds render
/// unwrapped.
pub fn category_for_kind(kind: &str) -> Option<Category> {
    let normalized: String = kind
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect();

    match normalized.as_str() {
        "comment" | "directive" => Some(Category::Comment),
        "metakey" | "fieldkey" | "headerkey" | "infokey" => Some(Category::MetaKey),
        "metavalue" | "fieldvalue" | "headervalue" | "infovalue" => Some(Category::MetaValue),
        "bar" | "barline" => Some(Category::Bar),
        "accidental" => Some(Category::Accidental),
        "slur" | "slurstart" | "slurend" => Some(Category::Slur),
        "note" | "pitch" | "rest" | "octave" => Some(Category::Note),
        "duration" | "length" => Some(Category::Duration),
        "chord" | "chordstart" | "chordend" => Some(Category::Chord),
        "text" | "whitespace" => Some(Category::Text),
        _ => None,
    }
}

/// Convert engine tokens into spans covering the whole source
///
/// Gaps between tokens and any untokenized tail become unwrapped spans.
/// Slur tokens get the same depth treatment as in the character scanner,
/// with the depth reset at every line feed. Tokens must be ordered and must
/// not overlap or run past the end of the source.
pub fn spans_from_tokens(source: &str, tokens: &[ExternalToken]) -> Result<Vec<Span>, EngineError> {
    let boundaries: Vec<usize> = source
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(source.len()))
        .collect();

    let mut spans = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut cursor = 0;
    let mut slur_depth = 0usize;

    for token in tokens {
        let TokenRange { start, end } = token.range;
        if start > end {
            return Err(EngineError::Malformed(format!(
                "token '{}' has start {} after end {}",
                token.kind, start, end
            )));
        }

        let (Some(&start_byte), Some(&end_byte)) = (boundaries.get(start), boundaries.get(end)) else {
            return Err(EngineError::Malformed(format!(
                "token '{}' range {}..{} exceeds source length {}",
                token.kind,
                start,
                end,
                boundaries.len() - 1
            )));
        };

        if start_byte < cursor {
            return Err(EngineError::Malformed(format!(
                "token '{}' at {} overlaps the previous token",
                token.kind, start
            )));
        }

        if cursor < start_byte {
            if source[cursor..start_byte].contains('\n') {
                slur_depth = 0;
            }
            spans.push(Span::plain(cursor..start_byte));
            cursor = start_byte;
        }

        if start_byte == end_byte {
            continue;
        }

        let text = &source[start_byte..end_byte];
        let span = match category_for_kind(&token.kind) {
            Some(Category::Slur) => {
                if text.starts_with(')') {
                    slur_depth = slur_depth.saturating_sub(1);
                    Span::slur(start_byte..end_byte, slur_depth)
                } else {
                    let depth = slur_depth;
                    slur_depth += 1;
                    Span::slur(start_byte..end_byte, depth)
                }
            }
            Some(category) => Span::new(category, start_byte..end_byte),
            None => Span::plain(start_byte..end_byte),
        };
        spans.push(span);

        if text.contains('\n') {
            slur_depth = 0;
        }
        cursor = end_byte;
    }

    if cursor < source.len() {
        spans.push(Span::plain(cursor..source.len()));
    }

    Ok(spans)
}
