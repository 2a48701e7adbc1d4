//! Parallax hero: the hero content drifts down at half scroll speed and
//! fades out as the first viewport scrolls away
//!
//! Only applies while the scroll offset is within one viewport of the top;
//! past that the hero is off screen and its style is left at the faded
//! resting point.

use crate::config::ParallaxConfig;
use crate::page::{BlockId, Page};

/// Selector for the hero content block
pub const HERO_SELECTOR: &str = ".hero-content";

#[derive(Debug, Clone)]
pub struct ParallaxState {
    fade_rows: u16,
    heroes: Vec<BlockId>,
}

impl ParallaxState {
    pub fn new(page: &Page, config: &ParallaxConfig) -> Self {
        Self {
            fade_rows: config.fade_rows.max(1),
            heroes: page.select_blocks(HERO_SELECTOR),
        }
    }

    /// Recompute hero style props from the scroll offset; returns whether
    /// anything changed
    pub fn apply(&self, page: &mut Page, scroll_offset: u16, viewport_rows: u16) -> bool {
        let mut dirty = false;
        for &hero in &self.heroes {
            if scroll_offset >= viewport_rows {
                continue;
            }
            let offset_rows = scroll_offset / 2;
            let fade = (scroll_offset as u32 * 100 / self.fade_rows as u32).min(100) as u8;

            let style = &mut page.block_mut(hero).style;
            if style.offset_rows != offset_rows || style.fade != fade {
                style.offset_rows = offset_rows;
                style.fade = fade;
                dirty = true;
            }
        }
        dirty
    }
}
