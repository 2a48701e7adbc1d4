//! Navbar shadow state
//!
//! The bar carries a shadow accent once the page has scrolled past a small
//! threshold and drops it again at the top, mirroring the box-shadow toggle
//! on the site.

use crate::config::NavbarConfig;

#[derive(Debug, Clone, Copy)]
pub struct NavbarState {
    shadow: bool,
    shadow_after_rows: u16,
    /// Index of the link the mouse is over, if any
    pub hovered_link: Option<usize>,
}

impl NavbarState {
    pub fn new(config: &NavbarConfig) -> Self {
        Self {
            shadow: false,
            shadow_after_rows: config.shadow_after_rows,
            hovered_link: None,
        }
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow
    }

    /// Recompute the shadow from the scroll offset; returns whether it changed
    pub fn update(&mut self, scroll_offset: u16) -> bool {
        let shadow = scroll_offset > self.shadow_after_rows;
        let changed = shadow != self.shadow;
        self.shadow = shadow;
        changed
    }

    /// Update the hovered link; returns whether it changed
    pub fn set_hovered_link(&mut self, link: Option<usize>) -> bool {
        let changed = self.hovered_link != link;
        self.hovered_link = link;
        changed
    }
}
