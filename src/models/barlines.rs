//! Bar-line symbols
//!
//! ABC writes bar lines as short runs of `|`, `:`, `[` and `]`. Only the
//! combinations listed here are bar lines; anything else is left to the
//! single-character rules of the scanner.

/// Barline types recognised by the highlighter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarlineType {
    Single,       // |
    Double,       // ||
    ThinThick,    // |]
    ThickThin,    // [|
    StartRepeat,  // |:
    EndRepeat,    // :|
    DoubleRepeat, // :: :|: :||:
}

impl BarlineType {
    /// Parse barline from string
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "|" => Some(BarlineType::Single),
            "||" => Some(BarlineType::Double),
            "|]" => Some(BarlineType::ThinThick),
            "[|" => Some(BarlineType::ThickThin),
            "|:" => Some(BarlineType::StartRepeat),
            ":|" => Some(BarlineType::EndRepeat),
            "::" | ":|:" | ":||:" => Some(BarlineType::DoubleRepeat),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_barlines() {
        assert_eq!(BarlineType::parse("|"), Some(BarlineType::Single));
        assert_eq!(BarlineType::parse("||"), Some(BarlineType::Double));
        assert_eq!(BarlineType::parse("|]"), Some(BarlineType::ThinThick));
        assert_eq!(BarlineType::parse("|:"), Some(BarlineType::StartRepeat));
        assert_eq!(BarlineType::parse(":|"), Some(BarlineType::EndRepeat));
        assert_eq!(BarlineType::parse(":|:"), Some(BarlineType::DoubleRepeat));
    }

    #[test]
    fn test_reject_other_runs() {
        assert_eq!(BarlineType::parse(":"), None);
        assert_eq!(BarlineType::parse("|||:"), None);
        assert_eq!(BarlineType::parse("]"), None);
        assert_eq!(BarlineType::parse(""), None);
    }
}
