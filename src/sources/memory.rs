//! Memory (RAM) module

use crate::core::{
    byte_human_fmt, Icon, Module, ModuleMetadata, Palette, SensorError, SensorFile, Tick,
    BYTES_PER_KB,
};
use log::debug;
use rootbar_types::MemoryConfig;
use std::path::Path;

const MEMORY_ICON: Icon = Icon::new(Palette::NORMAL, "\u{f2db} ");

/// The `/proc/meminfo` fields used to compute used memory, in kB
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total: u64,
    pub free: u64,
    pub buffers: u64,
    pub cached: u64,
}

impl MemInfo {
    /// Parse the relevant lines of `/proc/meminfo` read from `path`.
    /// The first missing field is reported as `MissingField`.
    pub fn parse(text: &str, path: &Path) -> Result<Self, SensorError> {
        let mut total = None;
        let mut free = None;
        let mut buffers = None;
        let mut cached = None;

        for line in text.lines() {
            let mut parts = line.split_whitespace();
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            let slot = match key {
                "MemTotal:" => &mut total,
                "MemFree:" => &mut free,
                "Buffers:" => &mut buffers,
                "Cached:" => &mut cached,
                _ => continue,
            };
            *slot = value.parse::<u64>().ok();
        }

        let require = |value: Option<u64>, field: &'static str| {
            value.ok_or_else(|| SensorError::MissingField {
                path: path.to_path_buf(),
                field,
            })
        };

        Ok(Self {
            total: require(total, "MemTotal")?,
            free: require(free, "MemFree")?,
            buffers: require(buffers, "Buffers")?,
            cached: require(cached, "Cached")?,
        })
    }

    /// Memory in use excluding buffers and page cache, in bytes
    pub fn used_bytes(&self) -> u64 {
        self.total
            .saturating_sub(self.free)
            .saturating_sub(self.buffers)
            .saturating_sub(self.cached)
            .saturating_mul(BYTES_PER_KB)
    }
}

/// Used memory module
pub struct MemoryModule {
    metadata: ModuleMetadata,
    sensor: SensorFile,
    /// Last good reading, reused when the sensor fails
    info: MemInfo,
}

impl MemoryModule {
    pub fn new(config: &MemoryConfig) -> Self {
        Self {
            metadata: ModuleMetadata::new("memory", "Memory (RAM)", "Used system memory"),
            sensor: SensorFile::open(&config.path),
            info: MemInfo::default(),
        }
    }

    fn refresh(&mut self) -> Result<(), SensorError> {
        self.info = self.sensor.read_with(MemInfo::parse)?;
        Ok(())
    }
}

impl Module for MemoryModule {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, _tick: &Tick) -> String {
        if let Err(e) = self.refresh() {
            debug!("Memory read failed: {}", e);
        }
        format!("{}{}", MEMORY_ICON, byte_human_fmt(self.info.used_bytes()))
    }
}
