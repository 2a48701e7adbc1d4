//! Overlay rendering
//!
//! Both overlays are deterministic functions of cell position, so they are
//! stable across frames (no flicker) and need no stored state. They only
//! touch blank cells, never text.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::theme;

/// Whether the grain texture puts a speck at this cell
///
/// A fixed-weight hash stands in for the SVG fractal noise; roughly one cell
/// in thirteen carries a speck.
pub fn grain_at(x: u16, y: u16) -> bool {
    let n = (x as u32).wrapping_mul(31).wrapping_add((y as u32).wrapping_mul(57));
    n % 13 == 0
}

/// Whether the radial highlight covers this cell of an area
///
/// The highlight sits at 30% width, 40% height of the area and covers about
/// half its radius, like the radial-gradient placeholder pattern. Columns
/// count half as much as rows to compensate for cell aspect.
pub fn radial_at(area: Rect, x: u16, y: u16) -> bool {
    if area.width == 0 || area.height == 0 {
        return false;
    }
    let cx = area.x as i32 + (area.width as i32 * 3) / 10;
    let cy = area.y as i32 + (area.height as i32 * 2) / 5;
    let dx = (x as i32 - cx) / 2;
    let dy = y as i32 - cy;
    let radius = (area.height as i32 / 2).max(1);
    dx * dx + dy * dy <= radius * radius
}

/// Speckle the blank cells of the hero with a grain texture
pub fn render_grain(frame: &mut Frame, area: Rect) {
    let buf = frame.buffer_mut();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if !grain_at(x, y) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y))
                && cell.symbol() == " "
            {
                cell.set_char('·');
                cell.set_style(theme::hero::GRAIN);
            }
        }
    }
}

/// Brighten the radial highlight region of a product image placeholder
pub fn render_radial(frame: &mut Frame, area: Rect) {
    let buf = frame.buffer_mut();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if !radial_at(area, x, y) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y))
                && cell.symbol() == "░"
            {
                cell.set_char('▒');
                cell.set_style(theme::cards::GRADIENT);
            }
        }
    }
}
