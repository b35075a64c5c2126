//! Color type used by the status bar markup.
//!
//! Colors serialize as `#RRGGBB` strings, the same form the bar renderer
//! expects inside its `^c...^` escapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Palette::NORMAL
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
            .ok_or_else(|| format!("invalid color '{}', expected #RRGGBB", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Fixed palette shared by all modules
pub struct Palette;

impl Palette {
    pub const NORMAL: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const ORANGE: Color = Color::new(0xFF, 0xA5, 0x00);
    pub const GREEN: Color = Color::new(0x50, 0xFA, 0x7B);
    pub const RED: Color = Color::new(0xFF, 0x55, 0x55);
}
