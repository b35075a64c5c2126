//! Text helpers: byte humanizer and the marquee scroll buffer

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SIZE_SUFFIXES: [&str; 5] = ["", "Ki", "Mi", "Gi", "Ti"];
const SIZE_BASE: f64 = 1024.0;

/// Format a byte count with one decimal and a binary suffix.
///
/// `0 -> "0.0"`, `1536 -> "1.5Ki"`, `1048576 -> "1.0Mi"`.
pub fn byte_human_fmt(bytes: u64) -> String {
    let mut scaled = bytes as f64;
    let mut suffix = 0;
    while scaled >= SIZE_BASE && suffix < SIZE_SUFFIXES.len() - 1 {
        scaled /= SIZE_BASE;
        suffix += 1;
    }
    format!("{:.1}{}", scaled, SIZE_SUFFIXES[suffix])
}

/// Move the first code point of `s` to the end.
pub fn rotate_code_points(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut rotated = String::with_capacity(s.len());
            rotated.push_str(chars.as_str());
            rotated.push(first);
            rotated
        }
        None => String::new(),
    }
}

/// Longest prefix of `s` that fits in `width` display columns.
///
/// Cuts only at code point boundaries and never splits a wide glyph.
pub fn take_columns(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Fixed-width scrolling window over a label.
///
/// When the label changes the buffer is rebuilt with left padding: labels
/// narrower than the window are padded up to the window width, wider ones
/// get the shorter `overflow_pad` so they scroll into view sooner. Every
/// `step` rotates the buffer left by one code point.
#[derive(Debug, Clone)]
pub struct Marquee {
    width: usize,
    overflow_pad: usize,
    label: Option<String>,
    buffer: String,
}

impl Marquee {
    pub fn new(width: usize, overflow_pad: usize) -> Self {
        Self {
            width,
            overflow_pad,
            label: None,
            buffer: String::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Label the buffer was last reset to
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Full scroll buffer, padding included
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Reset the buffer if `label` differs from the current one.
    /// Returns whether a reset happened.
    pub fn set_label(&mut self, label: &str) -> bool {
        if self.label.as_deref() == Some(label) {
            return false;
        }

        let label_width = label.width();
        let pad = if label_width < self.width {
            self.width - label_width
        } else {
            self.overflow_pad
        };

        self.buffer = " ".repeat(pad);
        self.buffer.push_str(label);
        self.label = Some(label.to_string());
        true
    }

    /// Rotate one code point and return the visible window
    pub fn step(&mut self) -> String {
        self.buffer = rotate_code_points(&self.buffer);
        self.visible().to_string()
    }

    /// Visible part of the buffer without rotating
    pub fn visible(&self) -> &str {
        take_columns(&self.buffer, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_human_fmt() {
        assert_eq!(byte_human_fmt(0), "0.0");
        assert_eq!(byte_human_fmt(1023), "1023.0");
        assert_eq!(byte_human_fmt(1024), "1.0Ki");
        assert_eq!(byte_human_fmt(1536), "1.5Ki");
        assert_eq!(byte_human_fmt(1024 * 1024), "1.0Mi");
        assert_eq!(byte_human_fmt(3 * 1024 * 1024 * 1024), "3.0Gi");
        assert_eq!(byte_human_fmt(2048 * 1024u64.pow(4)), "2048.0Ti");
    }

    #[test]
    fn test_byte_human_fmt_suffix_is_monotonic() {
        let rank = |s: &str| {
            SIZE_SUFFIXES
                .iter()
                .rposition(|suffix| s.ends_with(suffix))
                .unwrap()
        };
        let mut last = 0;
        for shift in 0..45 {
            let formatted = byte_human_fmt(1u64 << shift);
            let current = rank(&formatted);
            assert!(current >= last, "{} went backwards", formatted);
            last = current;
        }
    }

    #[test]
    fn test_rotate_code_points() {
        assert_eq!(rotate_code_points("abc"), "bca");
        assert_eq!(rotate_code_points("ñandú"), "andúñ");
        assert_eq!(rotate_code_points(""), "");
    }

    #[test]
    fn test_take_columns_respects_wide_glyphs() {
        assert_eq!(take_columns("hello", 3), "hel");
        assert_eq!(take_columns("ab", 10), "ab");
        // Each CJK glyph is two columns wide
        assert_eq!(take_columns("日本語", 5), "日本");
    }

    #[test]
    fn test_short_label_pads_to_width() {
        let mut marquee = Marquee::new(10, 4);
        assert!(marquee.set_label("abc"));
        assert_eq!(marquee.buffer(), "       abc");
        assert_eq!(marquee.buffer().chars().count(), 10);
    }

    #[test]
    fn test_long_label_uses_overflow_pad() {
        let mut marquee = Marquee::new(10, 4);
        let label = "a label longer than ten";
        assert!(marquee.set_label(label));
        assert_eq!(marquee.buffer(), format!("    {}", label));
    }

    #[test]
    fn test_label_exactly_width_uses_overflow_pad() {
        let mut marquee = Marquee::new(5, 2);
        marquee.set_label("abcde");
        assert_eq!(marquee.buffer(), "  abcde");
    }

    #[test]
    fn test_unchanged_label_keeps_scroll_position() {
        let mut marquee = Marquee::new(6, 2);
        marquee.set_label("abc");
        marquee.step();
        marquee.step();
        let before = marquee.buffer().to_string();

        assert!(!marquee.set_label("abc"));
        assert_eq!(marquee.buffer(), before);

        assert!(marquee.set_label("xyz"));
        assert_eq!(marquee.buffer(), "   xyz");
    }

    #[test]
    fn test_step_rotates_and_preserves_length() {
        let mut marquee = Marquee::new(4, 1);
        marquee.set_label("ab");
        let len = marquee.buffer().chars().count();

        assert_eq!(marquee.step(), " ab ");
        assert_eq!(marquee.step(), "ab  ");
        assert_eq!(marquee.step(), "b  a");
        for _ in 0..10 {
            marquee.step();
            assert_eq!(marquee.buffer().chars().count(), len);
        }
    }

    #[test]
    fn test_visible_window_is_clipped_to_width() {
        let mut marquee = Marquee::new(5, 1);
        marquee.set_label("Ölüdeniz sunset");
        let visible = marquee.step();
        assert_eq!(visible, "Ölüde");
        assert_eq!(visible.width(), 5);
    }
}
