//! Per-code-point classification.  Stateless and pure.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::core::constants::SYMBOLS;

/// The four disjoint classes every code point falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Member of [`SYMBOLS`].
    Symbol,
    /// Decimal digit (general category Nd) in any script.
    Digit,
    /// Whitespace other than `\n` / `\r`; ignored by the scan.
    Skippable,
    /// Anything else, including line breaks.
    Other,
}

impl CharClass {
    #[inline]
    #[must_use]
    pub fn of(c: char) -> Self {
        if c.is_whitespace() && c != '\n' && c != '\r' {
            Self::Skippable
        } else if is_symbol(c) {
            Self::Symbol
        } else if is_decimal_digit(c) {
            Self::Digit
        } else {
            Self::Other
        }
    }

    /// Symbols and digits take part in bigrams.
    #[inline]
    #[must_use]
    pub const fn qualifies(self) -> bool {
        matches!(self, Self::Symbol | Self::Digit)
    }
}

#[inline]
#[must_use]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Superscripts, fractions and roman numerals are numeric but not decimal digits.
#[inline]
#[must_use]
pub fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}
