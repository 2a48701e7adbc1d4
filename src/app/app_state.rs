use std::time::Instant;

use crate::config::Config;
use crate::counter::CounterState;
use crate::layout::LayoutRegions;
use crate::navbar::NavbarState;
use crate::notification::NotificationState;
use crate::page::Page;
use crate::parallax::ParallaxState;
use crate::reveal::RevealState;
use crate::scroll::ScrollState;

/// Application state
///
/// One instance per process, constructed once at startup; the page lives as
/// long as the process does. All the page behaviors hang off it and are
/// advanced together from the event loop.
pub struct App {
    pub page: Page,
    pub scroll: ScrollState,
    pub navbar: NavbarState,
    pub parallax: ParallaxState,
    pub counters: CounterState,
    pub reveal: RevealState,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(page: Page, config: &Config) -> Self {
        Self {
            counters: CounterState::new(&page, config),
            reveal: RevealState::new(&page, &config.reveal),
            parallax: ParallaxState::new(&page, &config.parallax),
            navbar: NavbarState::new(&config.navbar),
            page,
            scroll: ScrollState::new(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::default(),
            should_quit: false,
            // first frame always draws
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Advance all time-driven state: glide, visibility, counters, expiry
    ///
    /// Called once per event-loop pass. Viewport geometry comes from the last
    /// render; before the first frame it is zero and nothing intersects.
    pub fn on_tick(&mut self, now: Instant) {
        let viewport_rows = self.scroll.viewport_rows;

        if self.scroll.tick_glide() {
            self.dirty = true;
        }
        if self.navbar.update(self.scroll.offset) {
            self.dirty = true;
        }
        if self
            .parallax
            .apply(&mut self.page, self.scroll.offset, viewport_rows)
        {
            self.dirty = true;
        }
        if self
            .reveal
            .poll_visibility(&mut self.page, self.scroll.offset, viewport_rows)
        {
            self.dirty = true;
        }
        if self
            .counters
            .poll_visibility(&mut self.page, self.scroll.offset, viewport_rows, now)
        {
            self.dirty = true;
        }
        if self.counters.on_tick(&mut self.page, now) {
            self.dirty = true;
        }
        if self.notification.clear_if_expired() {
            self.dirty = true;
        }
    }

    /// Names of anchored sections in document order (nav link order)
    pub fn anchors(&self) -> Vec<String> {
        self.page
            .sections()
            .filter_map(|(_, s)| s.anchor.clone())
            .collect()
    }

    /// Glide the viewport to the named section; unknown anchors no-op
    pub fn glide_to_anchor(&mut self, anchor: &str) -> bool {
        let Some(section) = self.page.anchor_target(anchor) else {
            return false;
        };
        let top = self.page.section_extent(section).top;
        self.scroll.glide_to(top);
        true
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
