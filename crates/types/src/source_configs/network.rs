//! Network (wireless SSID) configuration types.

use serde::{Deserialize, Serialize};

fn default_interface() -> String {
    "wlp3s0".to_string()
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Wireless interface queried for its ESSID
    #[serde(default = "default_interface")]
    pub interface: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
        }
    }
}
