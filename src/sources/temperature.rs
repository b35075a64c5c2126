//! CPU temperature module
//!
//! Reads a thermal zone in millidegrees Celsius and picks a thermometer
//! icon by how close the reading is to the configured maximum.

use crate::core::{clamped, Icon, Module, ModuleMetadata, Palette, SensorFile, Tick};
use log::debug;
use rootbar_types::TemperatureConfig;

const TEMP_ICONS: [Icon; 4] = [
    Icon::new(Palette::NORMAL, "\u{f2cb}"),
    Icon::new(Palette::NORMAL, "\u{f2c9}"),
    Icon::new(Palette::ORANGE, "\u{f2c8}"),
    Icon::new(Palette::RED, "\u{f2c7}"),
];

/// Map a reading onto `0..buckets`: `ceil(reading / max * (buckets - 1))`,
/// clamped to the last bucket.
pub fn temperature_bucket(millidegrees: i64, max_millidegrees: u32, buckets: usize) -> usize {
    let Some(last) = buckets.checked_sub(1) else {
        return 0;
    };
    if millidegrees <= 0 {
        return 0;
    }
    if max_millidegrees == 0 {
        return last;
    }

    let fraction = millidegrees as f64 / f64::from(max_millidegrees);
    let index = (fraction * last as f64).ceil();
    (index as usize).min(last)
}

/// Thermal zone temperature module
pub struct TemperatureModule {
    metadata: ModuleMetadata,
    sensor: SensorFile,
    max_millidegrees: u32,
    /// Last good reading, reused when the sensor fails
    millidegrees: i64,
}

impl TemperatureModule {
    pub fn new(config: &TemperatureConfig) -> Self {
        Self {
            metadata: ModuleMetadata::new(
                "temperature",
                "Temperature",
                "CPU thermal zone temperature",
            ),
            sensor: SensorFile::open(&config.path),
            max_millidegrees: config.max_millidegrees,
            millidegrees: 0,
        }
    }
}

impl Module for TemperatureModule {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, _tick: &Tick) -> String {
        match self.sensor.read_value::<i64>() {
            Ok(value) => self.millidegrees = value,
            Err(e) => debug!("Temperature read failed, keeping {}: {}", self.millidegrees, e),
        }

        let bucket = temperature_bucket(self.millidegrees, self.max_millidegrees, TEMP_ICONS.len());
        let icon = clamped(&TEMP_ICONS, bucket).map(ToString::to_string).unwrap_or_default();
        format!("{} {}°C", icon, self.millidegrees / 1000)
    }
}
