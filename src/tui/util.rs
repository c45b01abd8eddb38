use unicode_display_width::is_double_width;

// Directly taken from https://docs.rs/unicode-display-width/0.3.0/src/unicode_display_width/lib.rs.html#77-81
#[inline]
pub fn char_display_width(c: char) -> u16 {
    if c == '\u{FE0F}' || is_double_width(c) {
        return 2;
    }
    1
}

/// Columns taken by `s` when drawn one char per cell
pub fn str_display_width(s: &str) -> u16 {
    s.chars().map(char_display_width).fold(0, u16::saturating_add)
}
