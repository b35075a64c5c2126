//! Module trait and related types

use chrono::{DateTime, Local};
use std::time::Duration;

/// Metadata about a module
#[derive(Debug, Clone)]
pub struct ModuleMetadata {
    /// Unique identifier for this module type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this module shows
    pub description: String,
}

impl ModuleMetadata {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Timing context handed to every module on each tick
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Wall-clock time sampled once at the start of the tick
    pub now: DateTime<Local>,
    /// Configured spacing between ticks
    pub interval: Duration,
}

impl Tick {
    pub fn new(now: DateTime<Local>, interval: Duration) -> Self {
        Self { now, interval }
    }

    /// Tick for the current instant
    pub fn now(interval: Duration) -> Self {
        Self::new(Local::now(), interval)
    }
}

/// Trait for all status line modules
///
/// A module owns its sensor handles and any animation state. `render` is
/// called once per tick, in configuration order, and must always produce a
/// fragment: sensor failures are absorbed and replaced with a fallback
/// (cached value, "Offline", or an empty string).
pub trait Module {
    /// Get metadata about this module
    fn metadata(&self) -> &ModuleMetadata;

    /// Sample the sensor and produce this tick's text fragment
    fn render(&mut self, tick: &Tick) -> String;
}

/// Type-erased module for dynamic dispatch
pub type BoxedModule = Box<dyn Module>;
