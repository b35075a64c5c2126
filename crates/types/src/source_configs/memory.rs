//! Memory configuration types.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "/proc/meminfo".to_string()
}

/// Memory configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryConfig {
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
