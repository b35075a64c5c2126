//! Display bridges: where the finished status line goes

use rootbar_core::DisplayError;
use std::io::{self, Write};
use std::process::{Command, Stdio};

const XSETROOT: &str = "xsetroot";

/// Receives one finished status line per tick
pub trait DisplayBridge {
    fn set_title(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Writes the line as the X root window name, which dwm shows as its
/// status text
#[derive(Debug)]
pub struct XRootBridge {
    display: String,
}

impl XRootBridge {
    /// Resolve the display (explicit name, else `$DISPLAY`) and check that
    /// the root window can be written.
    pub fn open(display: Option<&str>) -> Result<Self, DisplayError> {
        let display = display
            .map(str::to_string)
            .or_else(|| std::env::var("DISPLAY").ok())
            .filter(|d| !d.is_empty())
            .ok_or_else(|| DisplayError::Unavailable("DISPLAY is not set".to_string()))?;

        let bridge = Self { display };
        bridge.store_name("").map_err(|e| match e {
            DisplayError::Failed { .. } => DisplayError::Unavailable(bridge.display.clone()),
            other => other,
        })?;
        Ok(bridge)
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    fn store_name(&self, name: &str) -> Result<(), DisplayError> {
        let status = Command::new(XSETROOT)
            .arg("-display")
            .arg(&self.display)
            .arg("-name")
            .arg(name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|source| DisplayError::Spawn {
                program: XSETROOT,
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DisplayError::Failed {
                program: XSETROOT,
                status,
            })
        }
    }
}

impl DisplayBridge for XRootBridge {
    fn set_title(&mut self, text: &str) -> Result<(), DisplayError> {
        self.store_name(text)
    }
}

/// Writes one line per tick, for bars that read their status from a pipe
pub struct StdoutBridge<W: Write = io::Stdout> {
    out: W,
}

impl StdoutBridge {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for StdoutBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutBridge<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayBridge for StdoutBridge<W> {
    fn set_title(&mut self, text: &str) -> Result<(), DisplayError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}
