//! Time sources for the tick gate.
//!
//! The engine never reads a hardware timer directly. It asks a [`Clock`]
//! for the current instant, so hosts can plug in their timer and tests
//! can drive time by hand.

use core::cell::Cell;

use embassy_time::{Duration, Instant};

/// Source of monotonic time
pub trait Clock {
    /// Current instant
    fn now(&self) -> Instant;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually driven clock
///
/// Useful for simulation and tests. Share it by reference between
/// several engines to advance them in lockstep.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    /// Create a clock starting at zero
    pub const fn new() -> Self {
        Self {
            now: Cell::new(Instant::from_millis(0)),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, now: Instant) {
        self.now.set(now);
    }

    /// Jump to an absolute time in milliseconds
    pub fn set_millis(&self, millis: u64) {
        self.set(Instant::from_millis(millis));
    }

    /// Move the clock forward
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
