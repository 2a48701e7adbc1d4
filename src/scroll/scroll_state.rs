//! Vertical scroll state for the page viewport

use super::glide::Glide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_rows: u16,
    glide: Glide,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_rows: 0,
            glide: Glide::idle(),
        }
    }

    pub fn update_bounds(&mut self, content_rows: u16, viewport_rows: u16) {
        self.viewport_rows = viewport_rows;
        self.max_offset = content_rows.saturating_sub(viewport_rows);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.glide.cancel();
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.glide.cancel();
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn page_down(&mut self) {
        let half_page = self.viewport_rows / 2;
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = self.viewport_rows / 2;
        self.scroll_up(half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.glide.cancel();
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.glide.cancel();
        self.offset = self.max_offset;
    }

    /// Start a smooth glide toward the given row
    pub fn glide_to(&mut self, row: u16) {
        self.glide.start(row.min(self.max_offset));
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_active()
    }

    /// Advance the glide by one tick; returns whether the offset moved
    pub fn tick_glide(&mut self) -> bool {
        match self.glide.step(self.offset) {
            Some(offset) => {
                self.offset = offset.min(self.max_offset);
                true
            }
            None => false,
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
