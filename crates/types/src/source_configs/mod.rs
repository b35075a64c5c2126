//! Configuration types for every status line module.

pub mod backlight;
pub mod battery;
pub mod clock;
pub mod memory;
pub mod music;
pub mod network;
pub mod static_text;
pub mod temperature;

pub use backlight::BacklightConfig;
pub use battery::BatteryConfig;
pub use clock::ClockConfig;
pub use memory::MemoryConfig;
pub use music::{MpdTarget, MusicConfig, DEFAULT_MPD_HOST, DEFAULT_MPD_PORT, DEFAULT_MPD_SOCKET};
pub use network::NetworkConfig;
pub use static_text::StaticTextConfig;
pub use temperature::TemperatureConfig;
