//! System time adapter.
//!
//! Implements [`Clock`] with a real blocking sleep.  Tests substitute a
//! recording clock so the error pause costs nothing.

use core::time::Duration;

use crate::app::ports::Clock;

/// Wall-clock adapter for the host.
#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
