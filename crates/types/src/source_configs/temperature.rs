//! Temperature configuration types.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "/sys/class/thermal/thermal_zone0/temp".to_string()
}

fn default_max_millidegrees() -> u32 {
    105_000
}

/// Temperature configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureConfig {
    /// Thermal zone pseudo-file reporting millidegrees Celsius
    #[serde(default = "default_path")]
    pub path: String,
    /// Reading that maps to the hottest icon
    #[serde(default = "default_max_millidegrees")]
    pub max_millidegrees: u32,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_millidegrees: default_max_millidegrees(),
        }
    }
}
