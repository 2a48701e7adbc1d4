//! Counter state: visibility-triggered runs over the page's stat displays

use std::time::Instant;

use crate::config::Config;
use crate::page::{BlockId, Page, SectionId};
use crate::viewport::IntersectionObserver;

use super::COUNTED_CLASS;
use super::format::{StatFormat, infer_format};
use super::run::CounterRun;

/// Selector for the sections that gate the count-up trigger
pub const STATS_SELECTOR: &str = ".why-stats";
/// Selector for the displays inside a stats section
pub const DISPLAY_SELECTOR: &str = ".stat-number";

#[derive(Debug)]
pub struct CounterState {
    observer: IntersectionObserver<SectionId>,
    runs: Vec<(BlockId, CounterRun)>,
    config: Config,
}

impl CounterState {
    /// Watch every stats container on the page
    pub fn new(page: &Page, config: &Config) -> Self {
        let mut observer = IntersectionObserver::new(config.counter.trigger_threshold, 0);
        for id in page.select_sections(STATS_SELECTOR) {
            observer.watch(id);
        }
        Self {
            observer,
            runs: Vec::new(),
            config: config.clone(),
        }
    }

    /// Poll container visibility and trigger count-ups on threshold crossing
    pub fn poll_visibility(
        &mut self,
        page: &mut Page,
        scroll_offset: u16,
        viewport_rows: u16,
        now: Instant,
    ) -> bool {
        let events = self
            .observer
            .poll(|id| page.section_extent(*id), scroll_offset, viewport_rows);
        let mut dirty = false;
        for event in events {
            if event.is_intersecting {
                dirty |= self.trigger(page, event.target, now);
            }
        }
        dirty
    }

    /// Start one run per display in the container, exactly once per container
    ///
    /// The container is marked synchronously before any run starts, so a
    /// duplicate visibility notification arriving later is a no-op. Returns
    /// whether anything was started.
    pub fn trigger(&mut self, page: &mut Page, container: SectionId, now: Instant) -> bool {
        if page.section(container).has_class(COUNTED_CLASS) {
            return false;
        }
        page.section_mut(container).add_class(COUNTED_CLASS);

        #[cfg(debug_assertions)]
        log::debug!("stats container triggered: {:?}", container);

        let mut started = false;
        for display in page.select_within(container, DISPLAY_SELECTOR) {
            let raw = page.block(display).text().to_string();
            match infer_format(&raw) {
                StatFormat::Magnitude { target } => {
                    let mut run = CounterRun::magnitude(target, &self.config.counter, now);
                    if self.config.motion.reduce {
                        let text = run.finish();
                        page.block_mut(display).set_text(text);
                    } else {
                        self.runs.push((display, run));
                    }
                    started = true;
                }
                StatFormat::PlusCount { target } => {
                    let mut run = CounterRun::plus(target, &self.config.counter, now);
                    if self.config.motion.reduce {
                        let text = run.finish();
                        page.block_mut(display).set_text(text);
                    } else {
                        self.runs.push((display, run));
                    }
                    started = true;
                }
                StatFormat::Currency { symbol } => {
                    // no count-up: a single synchronous render
                    page.block_mut(display).set_text(format!("{}0", symbol));
                    started = true;
                }
                StatFormat::Plain => {}
            }
        }
        started
    }

    /// Advance all active runs, writing each due render into the page
    ///
    /// Finished runs are removed; their timers were already released on the
    /// Done transition.
    pub fn on_tick(&mut self, page: &mut Page, now: Instant) -> bool {
        let mut dirty = false;
        for (display, run) in &mut self.runs {
            if let Some(text) = run.poll(now) {
                page.block_mut(*display).set_text(text);
                dirty = true;
            }
        }
        self.runs.retain(|(_, run)| !run.is_done());
        dirty
    }

    /// Number of runs still counting
    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }
}

#[cfg(test)]
#[path = "counter_state_tests.rs"]
mod counter_state_tests;
