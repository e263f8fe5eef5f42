//! Fixed-interval tick source.
//!
//! The board starts and stops the ticker; the host feeds it elapsed wall time
//! and gets back how many gravity ticks are due. Pausing stops delivery.

use crate::types::TICK_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    interval_ms: u32,
    accumulated_ms: u32,
    running: bool,
}

impl Ticker {
    /// A stopped ticker firing every `interval_ms` once started (0 is treated as 1)
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            running: false,
        }
    }

    /// Start (or restart) delivery; time accumulated before the call is discarded
    pub fn start(&mut self) {
        self.running = true;
        self.accumulated_ms = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Advance the clock and return the number of ticks that fired
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let fired = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        fired
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS)
    }
}
