//! Cancel-and-reschedule debounce.
//!
//! The debounce holds at most one pending deadline. Every trigger replaces
//! it, so the action only fires once the trigger burst has been quiet for
//! the full delay. Callers poll [`Debounce::fire`] from a loop that already
//! runs (the starfield frame loop), passing the current time.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use crate::clock::Clock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debounce {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms: delay_ms.max(0.0), deadline: None }
    }

    /// Schedule (or reschedule) the action for `now_ms + delay`.
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` once when the pending deadline has passed.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn trigger_at(&mut self, clock: &impl Clock) {
        self.trigger(clock.now_ms());
    }

    pub fn fire_at(&mut self, clock: &impl Clock) -> bool {
        self.fire(clock.now_ms())
    }
}
