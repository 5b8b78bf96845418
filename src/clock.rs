//! Millisecond time source.
//!
//! Frame-driven logic reads time through [`Clock`] so tests can step time
//! by hand instead of waiting on a real animation clock.

use std::cell::Cell;

/// A monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start_ms: f64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
