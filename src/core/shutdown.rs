//! Stop requests from SIGINT / SIGTERM
//!
//! Signal handlers only set flags; the update loop polls them at each tick
//! boundary. SIGINT stops quietly, SIGTERM additionally leaves a
//! "Terminated" marker on the display.

use signal_hook::consts::{SIGINT, SIGTERM};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    interrupted: Arc<AtomicBool>,
    terminated: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT and SIGTERM to this signal's flags
    pub fn install(&self) -> io::Result<()> {
        signal_hook::flag::register(SIGINT, Arc::clone(&self.interrupted))?;
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.terminated))?;
        Ok(())
    }

    /// Request a quiet stop
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Request a stop that leaves the termination marker
    pub fn terminate(&self) {
        self.terminated.store(true, Ordering::SeqCst);
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::SeqCst)
    }

    pub fn should_stop(&self) -> bool {
        self.is_interrupted() || self.is_terminated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_shared_between_clones() {
        let signal = ShutdownSignal::new();
        let handle = signal.clone();
        assert!(!signal.should_stop());

        handle.interrupt();
        assert!(signal.should_stop());
        assert!(signal.is_interrupted());
        assert!(!signal.is_terminated());

        handle.terminate();
        assert!(signal.is_terminated());
    }
}
