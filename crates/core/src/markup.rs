//! Inline color escapes understood by the status2d bar patch.
//!
//! A colored glyph is written as `^c#RRGGBB^<glyph>^d^`: set foreground,
//! glyph, reset to default.

use rootbar_types::Color;
use std::fmt;

/// Wrap `text` in a foreground color escape
pub fn colored(color: Color, text: &str) -> String {
    format!("^c{}^{}^d^", color, text)
}

/// A glyph with a fixed color, usable in const tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub color: Color,
    pub glyph: &'static str,
}

impl Icon {
    pub const fn new(color: Color, glyph: &'static str) -> Self {
        Self { color, glyph }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^c{}^{}^d^", self.color, self.glyph)
    }
}

/// Pick `table[index]`, clamping the index to the last entry.
///
/// Returns `None` only for an empty table.
pub fn clamped<T>(table: &[T], index: usize) -> Option<&T> {
    table.get(index.min(table.len().checked_sub(1)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootbar_types::Palette;

    #[test]
    fn test_colored_escape() {
        assert_eq!(colored(Palette::RED, "x"), "^c#FF5555^x^d^");
        let icon = Icon::new(Palette::GREEN, "\u{f001} ");
        assert_eq!(icon.to_string(), "^c#50FA7B^\u{f001} ^d^");
    }

    #[test]
    fn test_clamped_lookup() {
        let table = [1, 2, 3];
        assert_eq!(clamped(&table, 0), Some(&1));
        assert_eq!(clamped(&table, 2), Some(&3));
        assert_eq!(clamped(&table, 9), Some(&3));
        assert_eq!(clamped::<u8>(&[], 0), None);
    }
}
