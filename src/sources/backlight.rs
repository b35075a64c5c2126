//! Keyboard backlight (ThinkLight) indicator

use crate::core::{Module, ModuleMetadata, SensorFile, Tick};
use log::debug;
use rootbar_types::BacklightConfig;

/// Shows a fixed label while the light is on, nothing otherwise
pub struct BacklightModule {
    metadata: ModuleMetadata,
    sensor: SensorFile,
    label: String,
    on: bool,
}

impl BacklightModule {
    pub fn new(config: &BacklightConfig) -> Self {
        Self {
            metadata: ModuleMetadata::new("backlight", "Backlight", "Backlight LED indicator"),
            sensor: SensorFile::open(&config.path),
            label: config.label.clone(),
            on: false,
        }
    }
}

impl Module for BacklightModule {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, _tick: &Tick) -> String {
        match self.sensor.read_value::<u32>() {
            Ok(brightness) => self.on = brightness != 0,
            Err(e) => debug!("Backlight read failed: {}", e),
        }

        if self.on {
            self.label.clone()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_label_follows_brightness() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "0\n").unwrap();

        let mut module = BacklightModule::new(&BacklightConfig {
            path: tmp.path().to_string_lossy().into_owned(),
            label: " Light".to_string(),
        });
        let tick = Tick::now(Duration::from_millis(500));

        assert_eq!(module.render(&tick), "");
        std::fs::write(tmp.path(), "255\n").unwrap();
        assert_eq!(module.render(&tick), " Light");
        std::fs::write(tmp.path(), "1\n").unwrap();
        assert_eq!(module.render(&tick), " Light");
        std::fs::write(tmp.path(), "0\n").unwrap();
        assert_eq!(module.render(&tick), "");
    }

    #[test]
    fn test_missing_sensor_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut module = BacklightModule::new(&BacklightConfig {
            path: dir.path().join("brightness").to_string_lossy().into_owned(),
            ..BacklightConfig::default()
        });
        assert_eq!(module.render(&Tick::now(Duration::from_millis(500))), "");
    }
}
