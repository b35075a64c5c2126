//! Battery module with a charging animation
//!
//! While on AC and below 100% the icon cycles through the fill levels; the
//! animation pauses (it is not reset) whenever charging stops, so plugging
//! back in resumes from the same frame.

use crate::core::{clamped, AnimationState, Icon, Module, ModuleMetadata, Palette, SensorFile, Tick};
use log::debug;
use rootbar_types::BatteryConfig;

const BATTERY_ICONS: [Icon; 5] = [
    Icon::new(Palette::RED, "\u{f244}  "),
    Icon::new(Palette::NORMAL, "\u{f243}  "),
    Icon::new(Palette::NORMAL, "\u{f242}  "),
    Icon::new(Palette::NORMAL, "\u{f241}  "),
    Icon::new(Palette::NORMAL, "\u{f240}  "),
];

/// Animation frames index `BATTERY_ICONS[1..=4]`
const ANIMATION_FRAMES: u32 = BATTERY_ICONS.len() as u32 - 1;

/// Width of one capacity band in percent
const CAPACITY_BAND: u32 = 25;

/// Charging state derived from the AC flag and capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeState {
    Discharging,
    /// On AC and below 100%: animated
    Charging,
    /// On AC and full: static
    Full,
}

/// Icon index for a capacity reading when not animating
pub fn capacity_bucket(capacity: u32) -> usize {
    (capacity / CAPACITY_BAND) as usize
}

/// Battery capacity module
pub struct BatteryModule {
    metadata: ModuleMetadata,
    ac: SensorFile,
    capacity_sensor: SensorFile,
    animation_speed: f64,
    animation: AnimationState,
    /// Last good readings, reused when a sensor fails
    online: bool,
    capacity: u32,
}

impl BatteryModule {
    pub fn new(config: &BatteryConfig) -> Self {
        Self {
            metadata: ModuleMetadata::new(
                "battery",
                "Battery",
                "Battery capacity with charging animation",
            ),
            ac: SensorFile::open(&config.ac_path),
            capacity_sensor: SensorFile::open(&config.capacity_path),
            animation_speed: config.effective_animation_speed(),
            animation: AnimationState::new(ANIMATION_FRAMES),
            online: false,
            capacity: 0,
        }
    }

    pub fn state(&self) -> ChargeState {
        match (self.online, self.capacity < 100) {
            (true, true) => ChargeState::Charging,
            (true, false) => ChargeState::Full,
            (false, _) => ChargeState::Discharging,
        }
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    fn refresh(&mut self) {
        match self.ac.read_value::<u32>() {
            Ok(online) => self.online = online != 0,
            Err(e) => debug!("AC status read failed: {}", e),
        }
        match self.capacity_sensor.read_value::<u32>() {
            Ok(capacity) => self.capacity = capacity,
            Err(e) => debug!("Battery capacity read failed, keeping {}: {}", self.capacity, e),
        }
    }
}

impl Module for BatteryModule {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, tick: &Tick) -> String {
        self.refresh();

        let index = match self.state() {
            ChargeState::Charging => {
                let step = tick.interval.mul_f64(self.animation_speed);
                self.animation.advance(step, tick.interval);
                self.animation.frame() as usize
            }
            ChargeState::Discharging | ChargeState::Full => capacity_bucket(self.capacity),
        };

        let icon = clamped(&BATTERY_ICONS, index)
            .map(ToString::to_string)
            .unwrap_or_default();
        format!("{}{}%", icon, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;

    const INTERVAL: Duration = Duration::from_millis(500);

    struct Fixture {
        dir: TempDir,
        module: BatteryModule,
    }

    impl Fixture {
        fn new(online: u32, capacity: u32) -> Self {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("online"), format!("{}\n", online)).unwrap();
            std::fs::write(dir.path().join("capacity"), format!("{}\n", capacity)).unwrap();
            let module = BatteryModule::new(&BatteryConfig {
                ac_path: path_str(&dir.path().join("online")),
                capacity_path: path_str(&dir.path().join("capacity")),
                animation_speed: 1.0,
            });
            Self { dir, module }
        }

        fn set(&self, online: u32, capacity: u32) {
            std::fs::write(self.dir.path().join("online"), format!("{}\n", online)).unwrap();
            std::fs::write(self.dir.path().join("capacity"), format!("{}\n", capacity)).unwrap();
        }

        fn render(&mut self) -> String {
            self.module.render(&Tick::now(INTERVAL))
        }
    }

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_capacity_bands() {
        assert_eq!(capacity_bucket(0), 0);
        assert_eq!(capacity_bucket(24), 0);
        assert_eq!(capacity_bucket(25), 1);
        assert_eq!(capacity_bucket(60), 2);
        assert_eq!(capacity_bucket(99), 3);
        assert_eq!(capacity_bucket(100), 4);
    }

    #[test]
    fn test_discharging_icon_depends_only_on_capacity() {
        let mut fixture = Fixture::new(0, 60);
        for _ in 0..5 {
            assert_eq!(fixture.render(), format!("{}60%", BATTERY_ICONS[2]));
        }
        assert_eq!(fixture.module.state(), ChargeState::Discharging);
        assert_eq!(fixture.module.animation().frame(), 1);

        fixture.set(0, 10);
        assert_eq!(fixture.render(), format!("{}10%", BATTERY_ICONS[0]));
    }

    #[test]
    fn test_charging_advances_one_frame_when_timer_exceeds_interval() {
        let mut fixture = Fixture::new(1, 50);

        // First tick only accumulates a full interval, which is not "exceeding" it
        fixture.render();
        assert_eq!(fixture.module.animation().frame(), 1);
        assert_eq!(fixture.module.animation().elapsed(), INTERVAL);

        let text = fixture.render();
        assert_eq!(fixture.module.animation().frame(), 2);
        assert_eq!(fixture.module.animation().elapsed(), Duration::ZERO);
        assert_eq!(text, format!("{}50%", BATTERY_ICONS[2]));
    }

    #[test]
    fn test_charging_frames_stay_in_range() {
        let mut fixture = Fixture::new(1, 50);
        for _ in 0..50 {
            fixture.render();
            let frame = fixture.module.animation().frame();
            assert!((1..=ANIMATION_FRAMES).contains(&frame), "frame {} out of range", frame);
        }
    }

    #[test]
    fn test_unplugging_pauses_animation() {
        let mut fixture = Fixture::new(1, 50);
        fixture.render();
        fixture.render();
        fixture.render();
        let paused = *fixture.module.animation();
        assert_eq!(paused.frame(), 2);
        assert_eq!(paused.elapsed(), INTERVAL);

        fixture.set(0, 50);
        fixture.render();
        fixture.render();
        assert_eq!(*fixture.module.animation(), paused);

        fixture.set(1, 50);
        fixture.render();
        assert_eq!(fixture.module.animation().frame(), 3);
    }

    #[test]
    fn test_full_on_ac_is_static() {
        let mut fixture = Fixture::new(1, 100);
        assert_eq!(fixture.module.state(), ChargeState::Discharging);
        let text = fixture.render();
        assert_eq!(fixture.module.state(), ChargeState::Full);
        assert_eq!(text, format!("{}100%", BATTERY_ICONS[4]));
        assert_eq!(fixture.module.animation().frame(), 1);
    }

    #[test]
    fn test_failed_read_reuses_cached_values() {
        let mut fixture = Fixture::new(0, 80);
        let first = fixture.render();
        std::fs::write(fixture.dir.path().join("capacity"), "").unwrap();
        assert_eq!(fixture.render(), first);
    }

    #[test]
    fn test_capacity_above_100_is_clamped() {
        let mut fixture = Fixture::new(0, 130);
        assert_eq!(fixture.render(), format!("{}130%", BATTERY_ICONS[4]));
    }
}
