//! rootbar-core: Core trait and building blocks for the rootbar status line.
//!
//! This crate contains the `Module` trait every status line fragment
//! implements, the reusable sensor file handle, the text helpers (byte
//! humanizer, marquee) and the animation state used by animated icons.

pub mod animation;
pub mod constants;
pub mod error;
pub mod markup;
mod module;
pub mod sensor_file;
pub mod text;

pub use animation::AnimationState;
pub use constants::{
    BYTES_PER_KB, DEFAULT_DELIMITER, DEFAULT_TICK_MS, OFFLINE_TEXT, TERMINATED_MARKER,
};
pub use error::{DisplayError, PlayerError, SensorError};
pub use markup::{clamped, colored, Icon};
pub use module::{BoxedModule, Module, ModuleMetadata, Tick};
pub use sensor_file::SensorFile;
pub use text::{byte_human_fmt, rotate_code_points, take_columns, Marquee};

// Re-export types used in module signatures for convenience
pub use rootbar_types::{Color, ModuleConfig, Palette};
