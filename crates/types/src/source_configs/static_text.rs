//! Static text configuration types.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Configuration for a fixed text fragment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaticTextConfig {
    /// The text or glyph to display
    pub text: String,
    /// Wraps the text in a color escape when set
    #[serde(default)]
    pub color: Option<Color>,
}

impl Default for StaticTextConfig {
    fn default() -> Self {
        Self {
            text: "\u{f17c} ".to_string(),
            color: Some(Color::default()),
        }
    }
}
