//! Clock configuration types.

use serde::{Deserialize, Serialize};

fn default_time_format() -> String {
    "%H:%M".to_string()
}

fn default_date_format() -> String {
    "%A %d %B".to_string()
}

/// Clock configuration
///
/// Formats use chrono's strftime syntax.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            date_format: default_date_format(),
        }
    }
}
