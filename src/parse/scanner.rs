//! Line dispatcher and character scanner
//!
//! Each line is classified on its own:
//! 1. comment lines become one `comment` span
//! 2. information fields become a `metaKey` span and a `metaValue` span
//! 3. everything else is music and goes through the character scanner
//!
//! The scanner makes one left-to-right pass. Bar lines and duration
//! suffixes look ahead: the maximal candidate is computed first, then
//! validated, then either committed or dropped without touching any state.

use crate::models::{BarlineType, Category, Span};
use crate::parse::patterns::*;

/// Classify a whole source, line by line
///
/// Line feeds come back as unwrapped spans so the spans cover the source
/// without gaps.
pub fn scan_source(source: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut offset = 0;

    for (index, line) in source.split('\n').enumerate() {
        if index > 0 {
            spans.push(Span::plain(offset - 1..offset));
        }
        spans.extend(classify_line(line, offset));
        offset += line.len() + 1;
    }

    log::debug!("scanned {} bytes into {} spans", source.len(), spans.len());
    spans
}

/// Classify a single line starting at byte `offset` of the source
pub fn classify_line(line: &str, offset: usize) -> Vec<Span> {
    if line.is_empty() {
        return Vec::new();
    }

    if COMMENT_PATTERN.is_match(line) {
        return vec![Span::new(Category::Comment, offset..offset + line.len())];
    }

    if let Some(key) = FIELD_PATTERN.captures(line).and_then(|caps| caps.get(1)) {
        let split = offset + key.end();
        return vec![
            Span::new(Category::MetaKey, offset..split),
            Span::new(Category::MetaValue, split..offset + line.len()),
        ];
    }

    scan_music_line(line, offset)
}

/// Character view of one line with byte positions
struct LineCursor<'a> {
    line: &'a str,
    chars: Vec<(usize, char)>,
}

impl<'a> LineCursor<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            chars: line.char_indices().collect(),
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&(_, c)| c)
    }

    /// Byte position of character `index` (line length past the end)
    fn byte_at(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map(|&(byte, _)| byte)
            .unwrap_or(self.line.len())
    }

    fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.line[self.byte_at(from)..self.byte_at(to)]
    }

    /// Advance from `index` while `accept` holds
    fn skip_while(&self, mut index: usize, accept: impl Fn(char) -> bool) -> usize {
        while self.char_at(index).is_some_and(&accept) {
            index += 1;
        }
        index
    }
}

/// Run the character scanner over one music line
pub fn scan_music_line(line: &str, offset: usize) -> Vec<Span> {
    let cursor = LineCursor::new(line);
    let mut spans = Vec::new();
    let mut slur_depth = 0usize;
    let mut i = 0;

    let range = |from: usize, to: usize| offset + cursor.byte_at(from)..offset + cursor.byte_at(to);

    while let Some(c) = cursor.char_at(i) {
        if is_bar_start(c) {
            if let Some(end) = scan_bar(&cursor, i) {
                spans.push(Span::new(Category::Bar, range(i, end)));
                i = end;
                continue;
            }
        }

        if is_accidental(c) {
            spans.push(Span::new(Category::Accidental, range(i, i + 1)));
            i += 1;
            continue;
        }

        if is_slur_open(c) {
            spans.push(Span::slur(range(i, i + 1), slur_depth));
            slur_depth += 1;
            i += 1;
            continue;
        }

        if is_slur_close(c) {
            slur_depth = slur_depth.saturating_sub(1);
            spans.push(Span::slur(range(i, i + 1), slur_depth));
            i += 1;
            continue;
        }

        if is_note(c) {
            spans.push(Span::new(Category::Note, range(i, i + 1)));
            i += 1;

            if let Some(end) = scan_duration(&cursor, i) {
                spans.push(Span::new(Category::Duration, range(i, end)));
                i = end;
            }
            continue;
        }

        if is_chord_bracket(c) {
            spans.push(Span::new(Category::Chord, range(i, i + 1)));
            i += 1;
            continue;
        }

        spans.push(Span::new(Category::Text, range(i, i + 1)));
        i += 1;
    }

    spans
}

/// Maximal bar-line candidate starting at `start`, if it is a bar line
///
/// Returns the character index just past the bar.
fn scan_bar(cursor: &LineCursor, start: usize) -> Option<usize> {
    let end = cursor.skip_while(start + 1, is_bar_extension);
    BarlineType::parse(cursor.slice(start, end)).map(|_| end)
}

/// Duration suffix starting at `start`, if any
///
/// Returns the character index just past the suffix.
fn scan_duration(cursor: &LineCursor, start: usize) -> Option<usize> {
    if !cursor.char_at(start).is_some_and(is_duration_start) {
        return None;
    }

    let mut end = start;
    if cursor.char_at(end) == Some('/') {
        end += 1;
    }
    end = cursor.skip_while(end, |c| c.is_ascii_digit());

    if cursor.char_at(end) == Some('/') {
        end = cursor.skip_while(end + 1, |c| c.is_ascii_digit());
    }

    is_duration(cursor.slice(start, end)).then_some(end)
}
