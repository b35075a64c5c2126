//! Music player (MPD) configuration types.

use serde::{Deserialize, Serialize};

/// Port MPD listens on unless told otherwise
pub const DEFAULT_MPD_PORT: u16 = 6600;
/// Socket tried first when no host is configured
pub const DEFAULT_MPD_SOCKET: &str = "/run/mpd/socket";
/// TCP host tried after the default socket
pub const DEFAULT_MPD_HOST: &str = "localhost";

fn default_timeout_ms() -> u64 {
    1000
}

fn default_width() -> usize {
    30
}

fn default_overflow_pad() -> usize {
    10
}

/// Music player configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MusicConfig {
    /// `[password@]host`, where host is a name, an IP address or an
    /// absolute Unix socket path. `None` falls back to `MPD_HOST`, then to
    /// the default socket and `localhost`.
    #[serde(default)]
    pub host: Option<String>,
    /// `None` falls back to `MPD_PORT`, then 6600.
    #[serde(default)]
    pub port: Option<u16>,
    /// Overrides a password given in `host`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Connect, read and write timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Visible marquee width in display columns
    #[serde(default = "default_width")]
    pub width: usize,
    /// Left padding used when a label does not fit in `width`
    #[serde(default = "default_overflow_pad")]
    pub overflow_pad: usize,
}

/// Host and password after splitting `[password@]host`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpdTarget {
    /// `None` when only a password was given
    pub host: Option<String>,
    pub password: Option<String>,
}

impl MpdTarget {
    /// Split `password@host` at the last `@`. A leading `@` is not a
    /// password separator.
    pub fn parse(spec: &str) -> Self {
        match spec.rfind('@') {
            Some(at) if at > 0 => {
                let host = &spec[at + 1..];
                Self {
                    host: (!host.is_empty()).then(|| host.to_string()),
                    password: Some(spec[..at].to_string()),
                }
            }
            _ => Self {
                host: (!spec.is_empty()).then(|| spec.to_string()),
                password: None,
            },
        }
    }
}

impl MusicConfig {
    /// Host and password after applying the `MPD_HOST` fallback
    pub fn resolved_target(&self) -> MpdTarget {
        let mut target = self
            .host
            .clone()
            .or_else(|| std::env::var("MPD_HOST").ok().filter(|h| !h.is_empty()))
            .map(|spec| MpdTarget::parse(&spec))
            .unwrap_or_default();
        if self.password.is_some() {
            target.password = self.password.clone();
        }
        target
    }

    /// Port after applying the `MPD_PORT` fallback
    pub fn resolved_port(&self) -> u16 {
        self.port
            .or_else(|| std::env::var("MPD_PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_MPD_PORT)
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            password: None,
            timeout_ms: default_timeout_ms(),
            width: default_width(),
            overflow_pad: default_overflow_pad(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_host_and_port_win() {
        let config = MusicConfig {
            host: Some("/run/mpd/socket".to_string()),
            port: Some(6601),
            ..MusicConfig::default()
        };
        let target = config.resolved_target();
        assert_eq!(target.host.as_deref(), Some("/run/mpd/socket"));
        assert_eq!(target.password, None);
        assert_eq!(config.resolved_port(), 6601);
    }

    #[test]
    fn test_password_is_split_from_host() {
        let target = MpdTarget::parse("secret@127.0.0.1");
        assert_eq!(target.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(target.password.as_deref(), Some("secret"));

        let target = MpdTarget::parse("p@ss@music.lan");
        assert_eq!(target.host.as_deref(), Some("music.lan"));
        assert_eq!(target.password.as_deref(), Some("p@ss"));
    }

    #[test]
    fn test_password_only_leaves_host_unset() {
        let target = MpdTarget::parse("secret@");
        assert_eq!(target.host, None);
        assert_eq!(target.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_leading_at_is_not_a_password() {
        let target = MpdTarget::parse("@mpd");
        assert_eq!(target.host.as_deref(), Some("@mpd"));
        assert_eq!(target.password, None);
    }

    #[test]
    fn test_password_field_overrides_host_password() {
        let config = MusicConfig {
            host: Some("old@music.lan".to_string()),
            password: Some("new".to_string()),
            ..MusicConfig::default()
        };
        let target = config.resolved_target();
        assert_eq!(target.host.as_deref(), Some("music.lan"));
        assert_eq!(target.password.as_deref(), Some("new"));
    }

    #[test]
    fn test_defaults_from_partial_json() {
        let config: MusicConfig = serde_json::from_str(r#"{"host": "music.lan"}"#).unwrap();
        assert_eq!(config.host.as_deref(), Some("music.lan"));
        assert_eq!(config.password, None);
        assert_eq!(config.width, 30);
        assert_eq!(config.overflow_pad, 10);
        assert_eq!(config.timeout_ms, 1000);
    }
}
