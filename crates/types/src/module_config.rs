//! Tagged configuration enum covering every module kind.

use serde::{Deserialize, Serialize};

use crate::source_configs::{
    BacklightConfig, BatteryConfig, ClockConfig, MemoryConfig, MusicConfig, NetworkConfig,
    StaticTextConfig, TemperatureConfig,
};

/// Type-safe enum for all module configurations.
/// Uses serde tag for JSON serialization: {"module": "battery", ...}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "module")]
pub enum ModuleConfig {
    #[serde(rename = "backlight")]
    Backlight(BacklightConfig),

    #[serde(rename = "music")]
    Music(MusicConfig),

    #[serde(rename = "network")]
    Network(NetworkConfig),

    #[serde(rename = "temperature")]
    Temperature(TemperatureConfig),

    #[serde(rename = "battery")]
    Battery(BatteryConfig),

    #[serde(rename = "memory")]
    Memory(MemoryConfig),

    #[serde(rename = "clock")]
    Clock(ClockConfig),

    #[serde(rename = "static_text")]
    StaticText(StaticTextConfig),
}

impl ModuleConfig {
    /// Get the module type ID string
    pub fn module_type(&self) -> &'static str {
        match self {
            ModuleConfig::Backlight(_) => "backlight",
            ModuleConfig::Music(_) => "music",
            ModuleConfig::Network(_) => "network",
            ModuleConfig::Temperature(_) => "temperature",
            ModuleConfig::Battery(_) => "battery",
            ModuleConfig::Memory(_) => "memory",
            ModuleConfig::Clock(_) => "clock",
            ModuleConfig::StaticText(_) => "static_text",
        }
    }

    /// The stock module line-up, left to right
    pub fn default_set() -> Vec<ModuleConfig> {
        vec![
            ModuleConfig::Backlight(BacklightConfig::default()),
            ModuleConfig::Music(MusicConfig::default()),
            ModuleConfig::Network(NetworkConfig::default()),
            ModuleConfig::Temperature(TemperatureConfig::default()),
            ModuleConfig::Battery(BatteryConfig::default()),
            ModuleConfig::Memory(MemoryConfig::default()),
            ModuleConfig::Clock(ClockConfig::default()),
        ]
    }
}
