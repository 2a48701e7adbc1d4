//! Poll-based intersection observer
//!
//! Watches a set of targets and reports an event for each target whose
//! intersection state changed since the previous poll. The first poll
//! reports every target's initial state, matching observe-then-notify
//! semantics.

use std::collections::HashMap;
use std::hash::Hash;

use crate::page::RowExtent;

use super::intersection::visible_fraction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEvent<T> {
    pub target: T,
    pub is_intersecting: bool,
}

#[derive(Debug)]
pub struct IntersectionObserver<T> {
    threshold: f32,
    bottom_margin: u16,
    watched: Vec<T>,
    /// Last reported state per target; absent until first poll
    state: HashMap<T, bool>,
}

impl<T: Copy + Eq + Hash> IntersectionObserver<T> {
    pub fn new(threshold: f32, bottom_margin: u16) -> Self {
        Self {
            threshold,
            bottom_margin,
            watched: Vec::new(),
            state: HashMap::new(),
        }
    }

    /// Add a target; watching the same target twice is a no-op
    pub fn watch(&mut self, target: T) {
        if !self.watched.contains(&target) {
            self.watched.push(target);
        }
    }

    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Report threshold crossings since the last poll
    ///
    /// `extent_of` resolves each target to its current row extent, so targets
    /// stay valid across relayouts.
    pub fn poll(
        &mut self,
        extent_of: impl Fn(&T) -> RowExtent,
        scroll_offset: u16,
        viewport_rows: u16,
    ) -> Vec<IntersectionEvent<T>> {
        let mut events = Vec::new();
        for &target in &self.watched {
            let fraction = visible_fraction(
                extent_of(&target),
                scroll_offset,
                viewport_rows,
                self.bottom_margin,
            );
            let is_intersecting = fraction >= self.threshold && fraction > 0.0;
            if self.state.insert(target, is_intersecting) != Some(is_intersecting) {
                events.push(IntersectionEvent {
                    target,
                    is_intersecting,
                });
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(top: u16, height: u16) -> RowExtent {
        RowExtent { top, height }
    }

    #[test]
    fn test_first_poll_reports_initial_state() {
        let mut observer: IntersectionObserver<u8> = IntersectionObserver::new(0.5, 0);
        observer.watch(1);
        observer.watch(2);

        // target 1 at rows 0..4 is visible, target 2 at rows 50..54 is not
        let events = observer.poll(
            |&t| {
                if t == 1 {
                    extent(0, 4)
                } else {
                    extent(50, 4)
                }
            },
            0,
            20,
        );
        assert_eq!(events.len(), 2);
        assert!(events.iter().any(|e| e.target == 1 && e.is_intersecting));
        assert!(events.iter().any(|e| e.target == 2 && !e.is_intersecting));
    }

    #[test]
    fn test_no_events_without_state_change() {
        let mut observer: IntersectionObserver<u8> = IntersectionObserver::new(0.5, 0);
        observer.watch(1);

        observer.poll(|_| extent(0, 4), 0, 20);
        let events = observer.poll(|_| extent(0, 4), 0, 20);
        assert!(events.is_empty());
    }

    #[test]
    fn test_crossing_emits_in_both_directions() {
        let mut observer: IntersectionObserver<u8> = IntersectionObserver::new(0.5, 0);
        observer.watch(1);
        let target = extent(30, 4);

        // initially out of view
        let events = observer.poll(|_| target, 0, 20);
        assert_eq!(events, vec![IntersectionEvent { target: 1, is_intersecting: false }]);

        // scrolled into view
        let events = observer.poll(|_| target, 20, 20);
        assert_eq!(events, vec![IntersectionEvent { target: 1, is_intersecting: true }]);

        // scrolled back out
        let events = observer.poll(|_| target, 0, 20);
        assert_eq!(events, vec![IntersectionEvent { target: 1, is_intersecting: false }]);
    }

    #[test]
    fn test_threshold_gates_intersection() {
        // threshold 0.5: only 1 of 4 rows visible is not enough
        let mut observer: IntersectionObserver<u8> = IntersectionObserver::new(0.5, 0);
        observer.watch(1);
        let target = extent(19, 4);

        let events = observer.poll(|_| target, 0, 20);
        assert_eq!(events, vec![IntersectionEvent { target: 1, is_intersecting: false }]);

        // 2 of 4 rows visible crosses the 0.5 threshold
        let events = observer.poll(|_| target, 1, 20);
        assert_eq!(events, vec![IntersectionEvent { target: 1, is_intersecting: true }]);
    }

    #[test]
    fn test_zero_threshold_still_requires_some_overlap() {
        let mut observer: IntersectionObserver<u8> = IntersectionObserver::new(0.0, 0);
        observer.watch(1);

        let events = observer.poll(|_| extent(50, 4), 0, 20);
        assert_eq!(events, vec![IntersectionEvent { target: 1, is_intersecting: false }]);
    }

    #[test]
    fn test_watch_is_idempotent() {
        let mut observer: IntersectionObserver<u8> = IntersectionObserver::new(0.5, 0);
        observer.watch(1);
        observer.watch(1);
        assert_eq!(observer.watched_count(), 1);

        let events = observer.poll(|_| extent(0, 4), 0, 20);
        assert_eq!(events.len(), 1);
    }
}
