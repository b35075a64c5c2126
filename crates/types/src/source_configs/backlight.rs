//! Backlight indicator configuration types.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "/sys/devices/platform/thinkpad_acpi/leds/tpacpi::thinklight/brightness".to_string()
}

fn default_label() -> String {
    " Thinklight".to_string()
}

/// Backlight indicator configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BacklightConfig {
    /// Brightness pseudo-file; any non-zero value counts as "on"
    #[serde(default = "default_path")]
    pub path: String,
    /// Text shown while the light is on
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            label: default_label(),
        }
    }
}
