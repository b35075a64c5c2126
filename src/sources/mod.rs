//! Built-in status line modules
//!
//! Each module samples one sensor and renders one fragment of the line.
//! The set is closed: `build_module` maps every `ModuleConfig` variant to
//! its implementation.

mod backlight;
mod battery;
mod clock;
mod memory;
mod music;
mod network;
mod static_text;
mod temperature;

pub use backlight::BacklightModule;
pub use battery::{capacity_bucket, BatteryModule, ChargeState};
pub use clock::{clock_face, ClockModule};
pub use memory::{MemInfo, MemoryModule};
pub use music::{
    MpdDaemon, MpdSession, MusicModule, PlayState, PlayerDaemon, PlayerSession, PlayerSnapshot,
    SessionGuard, Track,
};
pub use network::{NetworkModule, SsidSource, WirelessIoctl};
pub use static_text::StaticTextModule;
pub use temperature::{temperature_bucket, TemperatureModule};

use crate::core::{BoxedModule, ModuleConfig};

/// Create the module described by `config`
pub fn build_module(config: &ModuleConfig) -> BoxedModule {
    match config {
        ModuleConfig::Backlight(cfg) => Box::new(BacklightModule::new(cfg)),
        ModuleConfig::Music(cfg) => Box::new(MusicModule::new(cfg)),
        ModuleConfig::Network(cfg) => Box::new(NetworkModule::new(cfg)),
        ModuleConfig::Temperature(cfg) => Box::new(TemperatureModule::new(cfg)),
        ModuleConfig::Battery(cfg) => Box::new(BatteryModule::new(cfg)),
        ModuleConfig::Memory(cfg) => Box::new(MemoryModule::new(cfg)),
        ModuleConfig::Clock(cfg) => Box::new(ClockModule::new(cfg)),
        ModuleConfig::StaticText(cfg) => Box::new(StaticTextModule::new(cfg)),
    }
}

/// Create every configured module, preserving order
pub fn build_all(configs: &[ModuleConfig]) -> Vec<BoxedModule> {
    configs
        .iter()
        .map(|config| {
            log::info!("Adding module '{}'", config.module_type());
            build_module(config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_all_preserves_order() {
        let modules = build_all(&ModuleConfig::default_set());
        let ids: Vec<&str> = modules.iter().map(|m| m.metadata().id.as_str()).collect();
        assert_eq!(
            ids,
            ["backlight", "music", "network", "temperature", "battery", "memory", "clock"]
        );
    }
}
