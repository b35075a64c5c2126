//! Application configuration

use anyhow::{Context, Result};
use rootbar_core::{ModuleConfig, DEFAULT_DELIMITER, DEFAULT_TICK_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Milliseconds between status line updates
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Appended after every module fragment
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Modules in display order
    #[serde(default = "ModuleConfig::default_set")]
    pub modules: Vec<ModuleConfig>,
}

fn default_version() -> u32 {
    1
}

fn default_interval_ms() -> u64 {
    DEFAULT_TICK_MS
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl AppConfig {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "rootbar", "rootbar")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Tick interval; zero is bumped to one millisecond
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            interval_ms: default_interval_ms(),
            delimiter: default_delimiter(),
            display: DisplayConfig::default(),
            modules: ModuleConfig::default_set(),
        }
    }
}

/// Where the status line is published
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBackend {
    /// Root window name on the X display
    #[default]
    Xroot,
    /// One line per tick on standard output
    Stdout,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub backend: DisplayBackend,
    /// X display name; `$DISPLAY` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.interval(), Duration::from_millis(500));
        assert_eq!(config.delimiter, " ");
        assert_eq!(config.display.backend, DisplayBackend::Xroot);
        let kinds: Vec<_> = config.modules.iter().map(|m| m.module_type()).collect();
        assert_eq!(
            kinds,
            ["backlight", "music", "network", "temperature", "battery", "memory", "clock"]
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "delimiter": " | ", "display": { "backend": "stdout" },
                 "modules": [ { "module": "memory" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.interval_ms, 500);
        assert_eq!(config.delimiter, " | ");
        assert_eq!(config.display.backend, DisplayBackend::Stdout);
        assert_eq!(config.modules.len(), 1);
        assert_eq!(config.modules[0].module_type(), "memory");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = AppConfig {
            interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            interval_ms: 250,
            ..AppConfig::default()
        };
        config.save_to_path(&path).unwrap();
        assert_eq!(AppConfig::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
