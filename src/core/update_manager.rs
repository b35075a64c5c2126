//! Update manager: polls every module on a fixed interval and publishes
//! the joined status line

use super::display::DisplayBridge;
use super::shutdown::ShutdownSignal;
use rootbar_core::{BoxedModule, DisplayError, Tick, TERMINATED_MARKER};
use log::{info, trace};
use std::thread;
use std::time::{Duration, Instant};

/// Owns the ordered module list and drives the tick loop
pub struct UpdateManager {
    modules: Vec<BoxedModule>,
    delimiter: String,
    interval: Duration,
}

impl UpdateManager {
    /// Create a new update manager
    pub fn new(modules: Vec<BoxedModule>, delimiter: &str, interval: Duration) -> Self {
        Self {
            modules,
            delimiter: delimiter.to_string(),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Render every module in order. Each fragment is followed by the
    /// delimiter, including the last one.
    pub fn render_line(&mut self, tick: &Tick) -> String {
        let mut line = String::with_capacity(256);
        for module in &mut self.modules {
            line.push_str(&module.render(tick));
            line.push_str(&self.delimiter);
        }
        line
    }

    /// Render one line and hand it to the display
    pub fn update_once<B: DisplayBridge + ?Sized>(
        &mut self,
        bridge: &mut B,
    ) -> Result<(), DisplayError> {
        let start = Instant::now();
        let line = self.render_line(&Tick::now(self.interval));
        trace!("Update cycle took {:?}", start.elapsed());
        bridge.set_title(&line)
    }

    /// Start the update loop
    ///
    /// Runs until `shutdown` is triggered. The flag is checked once per tick,
    /// before rendering, so a stop request takes effect within one interval.
    /// On termination the final marker is written before returning.
    pub fn run<B: DisplayBridge + ?Sized>(
        &mut self,
        bridge: &mut B,
        shutdown: &ShutdownSignal,
    ) -> Result<(), DisplayError> {
        info!(
            "Updating {} modules every {:?}",
            self.modules.len(),
            self.interval
        );

        while !shutdown.should_stop() {
            self.update_once(bridge)?;
            thread::sleep(self.interval);
        }

        if shutdown.is_terminated() {
            info!("Terminated, writing final marker");
            bridge.set_title(TERMINATED_MARKER)?;
        } else {
            info!("Interrupted, stopping");
        }
        Ok(())
    }
}
