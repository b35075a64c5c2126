//! Core traits and types for rootbar

mod display;
mod shutdown;
mod update_manager;

pub use display::{DisplayBridge, StdoutBridge, XRootBridge};
pub use shutdown::ShutdownSignal;
pub use update_manager::UpdateManager;

// Building blocks shared with the module implementations
pub use rootbar_core::{
    byte_human_fmt, clamped, colored, AnimationState, BoxedModule, Color, DisplayError, Icon,
    Marquee, Module, ModuleConfig, ModuleMetadata, Palette, PlayerError, SensorError, SensorFile,
    Tick, BYTES_PER_KB, DEFAULT_DELIMITER, DEFAULT_TICK_MS, OFFLINE_TEXT, TERMINATED_MARKER,
};
