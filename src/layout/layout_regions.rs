//! Regions recorded during render for mouse hit-testing

use ratatui::layout::Rect;

/// A rendered navbar link: its column span and the anchor it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub x_start: u16,
    pub x_end: u16,
    pub anchor: String,
}

impl NavLink {
    pub fn contains_column(&self, x: u16) -> bool {
        x >= self.x_start && x < self.x_end
    }
}

/// Where everything landed on the last render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    /// The fixed bar at the top
    pub navbar: Option<Rect>,
    /// The scrolled page viewport below it
    pub page: Option<Rect>,
    /// Link spans inside the navbar row
    pub links: Vec<NavLink>,
}
