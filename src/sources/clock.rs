//! Clock module
//!
//! Shows a clock-face emoji for the current half hour, the time, and the
//! date.

use crate::core::{colored, Icon, Module, ModuleMetadata, Palette, Tick};
use chrono::format::{Item, StrftimeItems};
use chrono::Timelike;
use log::warn;
use rootbar_types::ClockConfig;

/// Faces for HH:00, indexed by hour mod 12
const HOUR_FACES: [&str; 12] = [
    "🕛", "🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚",
];

/// Faces for HH:30, indexed by hour mod 12
const HALF_HOUR_FACES: [&str; 12] = [
    "🕧", "🕜", "🕝", "🕞", "🕟", "🕠", "🕡", "🕢", "🕣", "🕤", "🕥", "🕦",
];

const CALENDAR_ICON: Icon = Icon::new(Palette::NORMAL, "\u{f133} ");

/// Clock face emoji for a time of day
pub fn clock_face(hour: u32, minute: u32) -> &'static str {
    let index = (hour % 12) as usize;
    if minute < 30 {
        HOUR_FACES[index]
    } else {
        HALF_HOUR_FACES[index]
    }
}

/// Whether chrono accepts every specifier in `format`
fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn checked_format(format: &str, fallback: &str, what: &str) -> String {
    if is_valid_format(format) {
        format.to_string()
    } else {
        warn!("Invalid clock {} format '{}', using '{}'", what, format, fallback);
        fallback.to_string()
    }
}

/// Date and time module
pub struct ClockModule {
    metadata: ModuleMetadata,
    time_format: String,
    date_format: String,
}

impl ClockModule {
    pub fn new(config: &ClockConfig) -> Self {
        let defaults = ClockConfig::default();
        Self {
            metadata: ModuleMetadata::new("clock", "Clock", "Local date and time"),
            time_format: checked_format(&config.time_format, &defaults.time_format, "time"),
            date_format: checked_format(&config.date_format, &defaults.date_format, "date"),
        }
    }
}

impl Module for ClockModule {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, tick: &Tick) -> String {
        let now = tick.now;
        let face = clock_face(now.hour(), now.minute());

        format!(
            "{}{} {}{} ",
            colored(Palette::NORMAL, face),
            now.format(&self.time_format),
            CALENDAR_ICON,
            now.format(&self.date_format)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::time::Duration;

    fn tick_at(hour: u32, minute: u32) -> Tick {
        let now = Local
            .with_ymd_and_hms(2024, 3, 4, hour, minute, 0)
            .earliest()
            .unwrap();
        Tick::new(now, Duration::from_millis(500))
    }

    #[test]
    fn test_clock_faces() {
        assert_eq!(clock_face(0, 0), "🕛");
        assert_eq!(clock_face(12, 10), "🕛");
        assert_eq!(clock_face(13, 29), "🕐");
        assert_eq!(clock_face(13, 30), "🕜");
        assert_eq!(clock_face(23, 59), "🕦");
    }

    #[test]
    fn test_render_format() {
        let mut module = ClockModule::new(&ClockConfig::default());
        let text = module.render(&tick_at(13, 45));
        assert_eq!(
            text,
            format!(
                "^c#FFFFFF^🕜^d^13:45 {}Monday 04 March ",
                CALENDAR_ICON
            )
        );
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let mut module = ClockModule::new(&ClockConfig {
            time_format: "%Q".to_string(),
            date_format: "%Y".to_string(),
        });
        let text = module.render(&tick_at(8, 5));
        assert!(text.contains("08:05 "));
        assert!(text.ends_with("2024 "));
    }
}
