//! Visible-fraction computation for row extents

use crate::page::RowExtent;

/// Fraction of `extent` visible in the viewport, 0.0 to 1.0
///
/// The viewport covers page rows `[scroll_offset, scroll_offset +
/// viewport_rows)`, shortened at the bottom by `bottom_margin` rows (the row
/// analog of a negative root margin). Zero-height extents are never visible.
pub fn visible_fraction(
    extent: RowExtent,
    scroll_offset: u16,
    viewport_rows: u16,
    bottom_margin: u16,
) -> f32 {
    if extent.height == 0 {
        return 0.0;
    }
    let view_top = scroll_offset as u32;
    let view_bottom = view_top + viewport_rows.saturating_sub(bottom_margin) as u32;

    let top = (extent.top as u32).max(view_top);
    let bottom = (extent.bottom() as u32).min(view_bottom);
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) as f32 / extent.height as f32
}
