//! Wireless network module
//!
//! Shows the ESSID the interface is associated with, or "Offline".

use crate::core::{Icon, Module, ModuleMetadata, Palette, SensorError, Tick, OFFLINE_TEXT};
use log::debug;
use rootbar_types::NetworkConfig;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

const WIFI_ICON: Icon = Icon::new(Palette::NORMAL, "\u{f1eb} ");

/// `SIOCGIWESSID` from `<linux/wireless.h>`
const SIOCGIWESSID: u32 = 0x8B1B;
const IW_ESSID_MAX_SIZE: usize = 32;

// Fields are only read by the kernel
#[allow(dead_code)]
#[repr(C)]
#[derive(Clone, Copy)]
struct IwPoint {
    pointer: *mut libc::c_void,
    length: u16,
    flags: u16,
}

/// Mirrors `union iwreq_data`; `raw` pins the union to its kernel size
#[allow(dead_code)]
#[repr(C)]
union IwReqData {
    essid: IwPoint,
    raw: [u8; 16],
}

#[repr(C)]
struct IwReq {
    ifr_name: [libc::c_char; libc::IFNAMSIZ],
    u: IwReqData,
}

/// Something that can report the current network name
pub trait SsidSource {
    /// Current ESSID; an empty string means not associated
    fn ssid(&mut self) -> Result<String, SensorError>;
}

/// Queries the ESSID with the wireless-extensions ioctl
pub struct WirelessIoctl {
    interface: String,
}

impl WirelessIoctl {
    pub fn new(interface: &str) -> Self {
        Self {
            interface: interface.to_string(),
        }
    }

    fn ioctl_error(&self, source: io::Error) -> SensorError {
        SensorError::Ioctl {
            request: "SIOCGIWESSID",
            interface: self.interface.clone(),
            source,
        }
    }
}

impl SsidSource for WirelessIoctl {
    fn ssid(&mut self) -> Result<String, SensorError> {
        let name = self.interface.as_bytes();
        if name.is_empty() || name.len() >= libc::IFNAMSIZ {
            return Err(self.ioctl_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid interface name",
            )));
        }

        // SAFETY: plain socket(2) call; the result is checked before use.
        let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0) };
        if fd < 0 {
            return Err(self.ioctl_error(io::Error::last_os_error()));
        }
        // SAFETY: fd is a freshly created descriptor owned by nobody else.
        // OwnedFd closes it on every return path.
        let socket = unsafe { OwnedFd::from_raw_fd(fd) };

        let mut essid = [0u8; IW_ESSID_MAX_SIZE + 1];
        let mut request = IwReq {
            ifr_name: [0; libc::IFNAMSIZ],
            u: IwReqData {
                essid: IwPoint {
                    pointer: essid.as_mut_ptr().cast(),
                    length: essid.len() as u16,
                    flags: 0,
                },
            },
        };
        for (dst, src) in request.ifr_name.iter_mut().zip(name) {
            *dst = *src as libc::c_char;
        }

        // SAFETY: request is a valid iwreq whose essid pointer refers to a
        // buffer of the advertised length that outlives the call.
        let rc = unsafe {
            libc::ioctl(socket.as_raw_fd(), SIOCGIWESSID as _, &mut request as *mut IwReq)
        };
        if rc == -1 {
            return Err(self.ioctl_error(io::Error::last_os_error()));
        }

        let len = essid.iter().position(|&b| b == 0).unwrap_or(IW_ESSID_MAX_SIZE);
        Ok(String::from_utf8_lossy(&essid[..len]).into_owned())
    }
}

/// Network name module
pub struct NetworkModule<S: SsidSource = WirelessIoctl> {
    metadata: ModuleMetadata,
    source: S,
}

impl NetworkModule<WirelessIoctl> {
    pub fn new(config: &NetworkConfig) -> Self {
        Self::with_source(WirelessIoctl::new(&config.interface))
    }
}

impl<S: SsidSource> NetworkModule<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            metadata: ModuleMetadata::new("network", "Network", "Wireless network name"),
            source,
        }
    }
}

impl<S: SsidSource> Module for NetworkModule<S> {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, _tick: &Tick) -> String {
        let ssid = match self.source.ssid() {
            Ok(ssid) => ssid,
            Err(e) => {
                debug!("Network query failed: {}", e);
                String::new()
            }
        };

        if ssid.is_empty() {
            format!("{}{}", WIFI_ICON, OFFLINE_TEXT)
        } else {
            format!("{}{}", WIFI_ICON, ssid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    struct ScriptedSsid(VecDeque<Result<String, SensorError>>);

    impl SsidSource for ScriptedSsid {
        fn ssid(&mut self) -> Result<String, SensorError> {
            self.0.pop_front().unwrap_or_else(|| Ok(String::new()))
        }
    }

    #[test]
    fn test_ssid_and_offline() {
        let script = VecDeque::from(vec![
            Ok("home-5G".to_string()),
            Ok(String::new()),
            Err(SensorError::Ioctl {
                request: "SIOCGIWESSID",
                interface: "wlan0".to_string(),
                source: io::Error::from_raw_os_error(libc::ENODEV),
            }),
        ]);
        let mut module = NetworkModule::with_source(ScriptedSsid(script));
        let tick = Tick::now(Duration::from_millis(500));

        assert_eq!(module.render(&tick), format!("{}home-5G", WIFI_ICON));
        assert_eq!(module.render(&tick), format!("{}Offline", WIFI_ICON));
        assert_eq!(module.render(&tick), format!("{}Offline", WIFI_ICON));
    }

    #[test]
    fn test_missing_interface_renders_offline() {
        let mut module = NetworkModule::new(&NetworkConfig {
            interface: "rootbar-none0".to_string(),
        });
        let text = module.render(&Tick::now(Duration::from_millis(500)));
        assert_eq!(text, format!("{}Offline", WIFI_ICON));
    }

    #[test]
    fn test_overlong_interface_name_is_rejected() {
        let mut source = WirelessIoctl::new("an-interface-name-that-is-too-long");
        assert!(matches!(source.ssid(), Err(SensorError::Ioctl { .. })));
    }
}
