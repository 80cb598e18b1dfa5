//! Time sources.
//!
//! The session engine never reads the system clock itself. Every state
//! transition takes the current time in epoch milliseconds from the
//! caller, so a driver can run on wall time while tests drive a
//! [`ManualClock`] forward deterministically.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of "now" in Unix epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Virtual time source for tests. Starts at a fixed instant and only
/// moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    ms: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            ms: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.ms.set(self.ms.get().saturating_add(delta_ms));
    }

    pub fn set(&self, now_ms: u64) {
        self.ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.ms.get()
    }
}
