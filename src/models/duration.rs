//! Note duration suffixes
//!
//! A duration suffix follows a note or rest and scales its default length:
//! `A2` doubles it, `A/2` and `A/` halve it, `A3/2` dots it, `A//` quarters it.

use num_rational::Rational32;

/// Re-export Rational for duration calculations
pub type Rational = Rational32;

/// Parsed duration suffix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Duration {
    /// Digits before the slash, if any
    pub numerator: Option<u32>,
    /// Number of slashes (0, 1 or 2)
    pub slashes: u8,
    /// Digits after the last slash, if any
    pub denominator: Option<u32>,
}

impl Duration {
    /// Parse a duration suffix of the form `["/"] digit* ["/" digit*]`
    ///
    /// The empty string is not a duration. Digit runs too long for a `u32`
    /// are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let mut rest = text;
        let mut slashes = 0u8;

        if let Some(stripped) = rest.strip_prefix('/') {
            slashes += 1;
            rest = stripped;
        }

        let first_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (first, tail) = rest.split_at(first_len);
        rest = tail;

        let mut second = "";
        if let Some(stripped) = rest.strip_prefix('/') {
            slashes += 1;
            let second_len = stripped.bytes().take_while(u8::is_ascii_digit).count();
            let (digits, tail) = stripped.split_at(second_len);
            second = digits;
            rest = tail;
        }

        if !rest.is_empty() {
            return None;
        }

        let parse_digits = |digits: &str| -> Result<Option<u32>, ()> {
            if digits.is_empty() {
                Ok(None)
            } else {
                digits.parse::<u32>().map(Some).map_err(|_| ())
            }
        };

        // "/2" puts its only digit run after the slash
        let (numerator, denominator) = if text.starts_with('/') && slashes == 1 {
            (None, parse_digits(first).ok()?)
        } else {
            (parse_digits(first).ok()?, parse_digits(second).ok()?)
        };

        Some(Self {
            numerator,
            slashes,
            denominator,
        })
    }

    /// Length multiplier relative to the default note length
    ///
    /// Returns `None` for zero denominators or values that do not fit.
    pub fn value(&self) -> Option<Rational> {
        let numerator = i32::try_from(self.numerator.unwrap_or(1)).ok()?;
        let denominator = match (self.slashes, self.denominator) {
            (0, _) => 1,
            (_, Some(d)) => i32::try_from(d).ok()?,
            // each bare slash halves the length
            (n, None) => 1i32.checked_shl(u32::from(n))?,
        };
        if denominator == 0 {
            return None;
        }
        Some(Rational::new(numerator, denominator))
    }
}
