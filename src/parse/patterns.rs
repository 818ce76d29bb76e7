//! Character alphabets and line patterns of ABC notation

use once_cell::sync::Lazy;
use regex::Regex;

/// Comment lines (including `%%` directives)
pub static COMMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^%").expect("comment pattern is valid"));

/// Information fields such as `K: C` or `w: lyrics`
pub static FIELD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]:)(.*)$").expect("field pattern is valid"));

/// Duration suffix after a note or rest
pub static DURATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/?[0-9]*(/[0-9]*)?$").expect("duration pattern is valid"));

pub fn is_bar_start(c: char) -> bool {
    matches!(c, '|' | ':')
}

pub fn is_bar_extension(c: char) -> bool {
    matches!(c, '|' | ':' | ']')
}

pub fn is_accidental(c: char) -> bool {
    matches!(c, '^' | '_' | '=')
}

pub fn is_slur_open(c: char) -> bool {
    c == '('
}

pub fn is_slur_close(c: char) -> bool {
    c == ')'
}

/// Pitch letters, rests and octave marks
pub fn is_note(c: char) -> bool {
    matches!(c, 'A'..='G' | 'a'..='g' | 'z' | 'Z' | 'x' | 'X' | '\'' | ',')
}

pub fn is_chord_bracket(c: char) -> bool {
    matches!(c, '[' | ']')
}

pub fn is_duration_start(c: char) -> bool {
    c == '/' || c.is_ascii_digit()
}

pub fn is_duration(text: &str) -> bool {
    !text.is_empty() && DURATION_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_pattern() {
        assert!(COMMENT_PATTERN.is_match("% a comment"));
        assert!(COMMENT_PATTERN.is_match("%%score 1 2"));
        assert!(!COMMENT_PATTERN.is_match("ABC % trailing"));
    }

    #[test]
    fn test_field_pattern() {
        let caps = FIELD_PATTERN.captures("K: C").unwrap();
        assert_eq!(&caps[1], "K:");
        assert_eq!(&caps[2], " C");

        let caps = FIELD_PATTERN.captures("T:").unwrap();
        assert_eq!(&caps[2], "");

        assert!(FIELD_PATTERN.captures("|: ABC").is_none());
        assert!(FIELD_PATTERN.captures("AB: C").is_none());
    }

    #[test]
    fn test_duration_grammar() {
        for ok in ["2", "/2", "3/2", "/", "//", "3/", "16"] {
            assert!(is_duration(ok), "{} should be a duration", ok);
        }
        for bad in ["", "2/3/4", "a", "///"] {
            assert!(!is_duration(bad), "{} should not be a duration", bad);
        }
    }

    #[test]
    fn test_alphabets() {
        assert!(is_note('z'));
        assert!(is_note(','));
        assert!(!is_note('H'));
        assert!(is_accidental('='));
        assert!(is_chord_bracket(']'));
        assert!(is_bar_extension(']'));
        assert!(!is_bar_start(']'));
        assert!(!is_duration_start('٣'));
    }
}
