//! Span categories and classified spans
//!
//! Every character of a tune ends up in exactly one span. A span either
//! carries one of the closed set of categories below or no category at all,
//! in which case it is emitted as plain escaped text.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Semantic category of a highlighted span
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Comment,
    MetaKey,
    MetaValue,
    Bar,
    Accidental,
    Slur,
    Note,
    Duration,
    Chord,
    Text,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Comment,
        Category::MetaKey,
        Category::MetaValue,
        Category::Bar,
        Category::Accidental,
        Category::Slur,
        Category::Note,
        Category::Duration,
        Category::Chord,
        Category::Text,
    ];

    /// Name used in serialized output ("metaKey", "bar", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::MetaKey => "metaKey",
            Category::MetaValue => "metaValue",
            Category::Bar => "bar",
            Category::Accidental => "accidental",
            Category::Slur => "slur",
            Category::Note => "note",
            Category::Duration => "duration",
            Category::Chord => "chord",
            Category::Text => "text",
        }
    }
}

/// A contiguous run of source text with one classification
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    /// `None` renders the text unwrapped
    pub category: Option<Category>,
    /// Byte range into the whole source
    pub range: Range<usize>,
    /// Nesting depth, only set on slur spans
    pub slur_depth: Option<usize>,
}

impl Span {
    pub fn new(category: Category, range: Range<usize>) -> Self {
        Self {
            category: Some(category),
            range,
            slur_depth: None,
        }
    }

    /// Span emitted without markup (line feeds, token gaps, unmapped kinds)
    pub fn plain(range: Range<usize>) -> Self {
        Self {
            category: None,
            range,
            slur_depth: None,
        }
    }

    pub fn slur(range: Range<usize>, depth: usize) -> Self {
        Self {
            category: Some(Category::Slur),
            range,
            slur_depth: Some(depth),
        }
    }

    /// Text this span covers in `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
