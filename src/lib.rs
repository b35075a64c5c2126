//! rootbar: a small status line generator for dwm-style window managers
//!
//! This library provides:
//! - The built-in modules (network, temperature, battery, memory, clock,
//!   backlight, music player)
//! - The update loop and the display bridges it writes to
//! - Configuration management

pub mod config;
pub mod core;
pub mod sources;

// Re-export commonly used types
pub use config::{AppConfig, DisplayBackend, DisplayConfig};
pub use core::{DisplayBridge, Module, ShutdownSignal, UpdateManager};
