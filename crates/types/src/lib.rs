//! rootbar-types: Shared configuration types for the rootbar status line.
//!
//! This crate contains pure data types (module configs, colors) that are
//! shared by the core crate and the application. Nothing here touches the
//! filesystem or the display.

pub mod color;
pub mod module_config;
pub mod source_configs;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, Palette};
pub use module_config::ModuleConfig;
pub use source_configs::{
    BacklightConfig, BatteryConfig, ClockConfig, MemoryConfig, MpdTarget, MusicConfig,
    NetworkConfig, StaticTextConfig, TemperatureConfig, DEFAULT_MPD_HOST, DEFAULT_MPD_PORT,
    DEFAULT_MPD_SOCKET,
};
