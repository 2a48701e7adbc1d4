//! Smooth-scroll glide: ease toward a target row one tick at a time
//!
//! Each tick moves a quarter of the remaining distance, at least one row, so
//! the motion decelerates and always terminates.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glide {
    target: Option<u16>,
}

impl Glide {
    pub fn idle() -> Self {
        Self { target: None }
    }

    pub fn start(&mut self, target: u16) {
        self.target = Some(target);
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Next offset on the way to the target, or `None` when idle
    ///
    /// Arriving at the target clears it; the arriving step still reports the
    /// new offset so the caller redraws.
    pub fn step(&mut self, current: u16) -> Option<u16> {
        let target = self.target?;
        if current == target {
            self.target = None;
            return None;
        }
        let distance = current.abs_diff(target);
        let stride = (distance / 4).max(1);
        let next = if target > current {
            current + stride
        } else {
            current - stride
        };
        if next == target {
            self.target = None;
        }
        Some(next)
    }
}
