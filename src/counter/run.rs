//! A single count-up run for one stat display
//!
//! A run is a two-state machine: it is created Running with an owned interval
//! timer, and the tick that reaches the target clamps the value, renders the
//! exact final text, and transitions to Done, dropping the timer. Done is
//! absorbing: further ticks and polls produce nothing.

use std::time::{Duration, Instant};

use crate::config::CounterConfig;

use super::format::format_magnitude;
use super::interval::IntervalTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Running,
    Done,
}

/// How a run steps and renders its value
#[derive(Debug, Clone, Copy, PartialEq)]
enum Stepping {
    /// Fractional increments sized so the run spans the configured duration;
    /// intermediate ticks render the floored value through the magnitude rule
    Magnitude { increment: f64 },
    /// Fixed integer steps with a trailing '+'
    Plus { step: f64 },
}

#[derive(Debug, Clone)]
pub struct CounterRun {
    target: f64,
    current: f64,
    stepping: Stepping,
    phase: RunPhase,
    /// Released (dropped) on the transition to Done
    timer: Option<IntervalTimer>,
}

impl CounterRun {
    /// Run for a magnitude ("10M") display
    pub fn magnitude(target: f64, tuning: &CounterConfig, now: Instant) -> Self {
        let ticks = (tuning.duration_ms / tuning.magnitude_tick_ms.max(1)).max(1);
        Self {
            target,
            current: 0.0,
            stepping: Stepping::Magnitude {
                increment: target / ticks as f64,
            },
            phase: RunPhase::Running,
            timer: Some(IntervalTimer::new(
                Duration::from_millis(tuning.magnitude_tick_ms),
                now,
            )),
        }
    }

    /// Run for a plus-count ("500+") display
    pub fn plus(target: u64, tuning: &CounterConfig, now: Instant) -> Self {
        Self {
            target: target as f64,
            current: 0.0,
            stepping: Stepping::Plus {
                step: tuning.plus_step as f64,
            },
            phase: RunPhase::Running,
            timer: Some(IntervalTimer::new(
                Duration::from_millis(tuning.plus_tick_ms),
                now,
            )),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == RunPhase::Done
    }

    /// Advance by however many ticks are due at `now`
    ///
    /// Returns the text to render, or `None` when no tick was due or the run
    /// is already Done.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let timer = self.timer.as_mut()?;
        let due = timer.ticks_due(now);
        let mut rendered = None;
        for _ in 0..due {
            match self.tick() {
                Some(text) => rendered = Some(text),
                None => break,
            }
        }
        rendered
    }

    /// Advance by exactly one tick
    pub fn tick(&mut self) -> Option<String> {
        if self.phase == RunPhase::Done {
            return None;
        }

        let increment = match self.stepping {
            Stepping::Magnitude { increment } => increment,
            Stepping::Plus { step } => step,
        };
        self.current += increment;

        if self.current >= self.target {
            return Some(self.finish());
        }

        Some(match self.stepping {
            Stepping::Magnitude { .. } => format_magnitude(self.current.floor()),
            Stepping::Plus { .. } => format!("{}+", self.current as u64),
        })
    }

    /// Clamp to the target, render the exact final text, and stop
    ///
    /// Rendering goes through the same rule as intermediate ticks, so a
    /// 1,500,000 target finishes as "2M", not the authored "1.5M".
    pub fn finish(&mut self) -> String {
        self.current = self.target;
        self.phase = RunPhase::Done;
        self.timer = None;
        match self.stepping {
            Stepping::Magnitude { .. } => format_magnitude(self.target),
            Stepping::Plus { .. } => format!("{}+", self.target as u64),
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[cfg(test)]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod run_tests;
