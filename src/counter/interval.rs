//! Recurring interval timer polled from the event loop
//!
//! The event loop wakes on a short poll timeout rather than on exact timer
//! deadlines, so a timer reports how many whole periods have elapsed since it
//! last fired and the caller advances one animation step per elapsed period.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    period: Duration,
    last_fire: Instant,
}

impl IntervalTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            last_fire: now,
        }
    }

    /// Number of periods elapsed since the last fire, advancing the timer
    ///
    /// Returns 0 when the period has not yet elapsed. A stalled loop catches
    /// up by reporting several ticks at once.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        if self.period.is_zero() {
            // degenerate config; fire exactly once per poll
            self.last_fire = now;
            return 1;
        }
        let mut ticks = 0;
        while now.duration_since(self.last_fire) >= self.period {
            self.last_fire += self.period;
            ticks += 1;
        }
        ticks
    }
}
