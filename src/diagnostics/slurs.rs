//! Slur diagnostics - detects unmatched slur brackets
//!
//! Uses stack-based pairing per line, matching the highlighter's
//! line-scoped slur depth:
//! - On `(`: push to stack
//! - On `)`: pop from stack, if empty = orphan end
//! - At the end of the line: anything left on stack = orphan starts
//!
//! Comment and field lines never contribute slurs.

use crate::models::Category;
use crate::parse::scan_source;

use super::{line_col, DiagnosticSeverity, ValidationError};

fn orphan(source: &str, offset: usize, code: &str, message: &str) -> ValidationError {
    let (line, column) = line_col(source, offset);
    ValidationError {
        line,
        column,
        start_col: offset,
        end_col: offset + 1,
        severity: DiagnosticSeverity::Warning,
        code: code.to_string(),
        message: message.to_string(),
    }
}

/// Unmatched slur brackets in the music lines of `source`
pub fn unmatched_slurs(source: &str) -> Vec<ValidationError> {
    let mut marks = Vec::new();
    let mut stack: Vec<usize> = Vec::new(); // character offsets of open slurs
    let mut position = 0;

    let flush = |stack: &mut Vec<usize>, marks: &mut Vec<ValidationError>| {
        for start in stack.drain(..) {
            marks.push(orphan(
                source,
                start,
                "slur_orphan_begin",
                "Unmatched slur start (no closing bracket)",
            ));
        }
    };

    for span in scan_source(source) {
        let text = span.text(source);

        match span.category {
            Some(Category::Slur) if text == "(" => stack.push(position),
            Some(Category::Slur) => {
                if stack.pop().is_none() {
                    marks.push(orphan(
                        source,
                        position,
                        "slur_orphan_end",
                        "Unmatched slur end (no opening bracket)",
                    ));
                }
            }
            None if text == "\n" => flush(&mut stack, &mut marks),
            _ => {}
        }

        position += text.chars().count();
    }
    flush(&mut stack, &mut marks);

    marks.sort_by_key(|mark| mark.start_col);
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_slur() {
        assert!(unmatched_slurs("(AB)").is_empty());
    }

    #[test]
    fn test_orphan_end() {
        let marks = unmatched_slurs("AB)");
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].code, "slur_orphan_end");
        assert_eq!(marks[0].start_col, 2);
    }

    #[test]
    fn test_orphan_start() {
        let marks = unmatched_slurs("(AB");
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].code, "slur_orphan_begin");
        assert_eq!(marks[0].column, 0);
    }

    #[test]
    fn test_nested_slurs() {
        assert!(unmatched_slurs("((A)B)").is_empty());
    }

    #[test]
    fn test_slurs_do_not_cross_lines() {
        let marks = unmatched_slurs("(A\nB)");
        let codes: Vec<&str> = marks.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["slur_orphan_begin", "slur_orphan_end"]);
        assert_eq!((marks[1].line, marks[1].column), (1, 1));
    }

    #[test]
    fn test_comment_and_field_lines_ignored() {
        assert!(unmatched_slurs("% (\nT: )\n").is_empty());
    }

    #[test]
    fn test_empty_source() {
        assert!(unmatched_slurs("").is_empty());
    }
}
