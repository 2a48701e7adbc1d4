//! Scroll reveal: blocks gain the `active` class when they scroll into view
//!
//! The observer subscription is repeat-fire, but adding a class is
//! idempotent and nothing removes it, so a block reveals once and stays
//! revealed.

use crate::config::RevealConfig;
use crate::page::{BlockId, Page};
use crate::viewport::IntersectionObserver;

/// Selector for blocks that participate in scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
/// Class added when a block has been revealed
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug)]
pub struct RevealState {
    observer: IntersectionObserver<BlockId>,
}

impl RevealState {
    /// Watch every reveal block on the page
    pub fn new(page: &Page, config: &RevealConfig) -> Self {
        let mut observer =
            IntersectionObserver::new(config.threshold, config.bottom_margin_rows);
        for id in page.select_blocks(REVEAL_SELECTOR) {
            observer.watch(id);
        }
        Self { observer }
    }

    /// Activate blocks whose visibility crossed the threshold
    pub fn poll_visibility(
        &mut self,
        page: &mut Page,
        scroll_offset: u16,
        viewport_rows: u16,
    ) -> bool {
        let events = self
            .observer
            .poll(|id| page.block_extent(*id), scroll_offset, viewport_rows);
        let mut dirty = false;
        for event in events {
            if event.is_intersecting && !page.block(event.target).has_class(ACTIVE_CLASS) {
                page.block_mut(event.target).add_class(ACTIVE_CLASS);
                dirty = true;
            }
        }
        dirty
    }
}
