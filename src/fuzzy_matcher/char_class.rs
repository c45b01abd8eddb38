/// Character class used to derive boundary bonuses.
///
/// Classes are checked in priority order: a char that is both lowercase and
/// alphabetic is `Lower`, never `Letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Lowercase letter
    Lower,
    /// Uppercase letter
    Upper,
    /// Letter without case (CJK, Arabic, ...)
    Letter,
    /// Decimal digit `0-9`; other numeric chars such as `²` or `½` are not digits
    Number,
    /// Whitespace, punctuation, symbols
    NonWord,
}

impl CharClass {
    /// Classifies a single character
    #[inline]
    pub fn of(c: char) -> Self {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_digit() {
            CharClass::Number
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::NonWord
        }
    }

    /// Returns true for every class except `NonWord`
    #[inline]
    pub fn is_word(self) -> bool {
        self != CharClass::NonWord
    }
}
