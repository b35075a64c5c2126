//! Battery configuration types.

use serde::{Deserialize, Serialize};

fn default_ac_path() -> String {
    "/sys/class/power_supply/AC/online".to_string()
}

fn default_capacity_path() -> String {
    "/sys/class/power_supply/BAT0/capacity".to_string()
}

fn default_animation_speed() -> f64 {
    1.0
}

/// Battery configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatteryConfig {
    #[serde(default = "default_ac_path")]
    pub ac_path: String,
    #[serde(default = "default_capacity_path")]
    pub capacity_path: String,
    /// Fraction of a tick added to the charging animation timer per tick.
    /// Valid range is (0.0, 1.0]; out-of-range values are clamped.
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f64,
}

impl BatteryConfig {
    /// Animation speed clamped to its valid range
    pub fn effective_animation_speed(&self) -> f64 {
        if self.animation_speed.is_finite() && self.animation_speed > 0.0 {
            self.animation_speed.min(1.0)
        } else {
            default_animation_speed()
        }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            ac_path: default_ac_path(),
            capacity_path: default_capacity_path(),
            animation_speed: default_animation_speed(),
        }
    }
}
