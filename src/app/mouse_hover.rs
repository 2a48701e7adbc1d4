//! Mouse hover handling
//!
//! Hovering a product card lifts it, hovering a process step swaps its
//! background, and hovering a navbar link underlines it. Leaving restores
//! the resting style; only one block of each kind is hot at a time.

use crate::layout::{block_at, nav_link_at};
use crate::page::BlockId;

use super::app_state::App;

/// Update hover styling for the pointer position; returns whether anything
/// visible changed
pub fn handle_hover(app: &mut App, column: u16, row: u16) -> bool {
    let link = nav_link_at(&app.layout_regions, column, row).map(|(index, _)| index);
    let mut dirty = app.navbar.set_hovered_link(link);

    let hit = block_at(&app.layout_regions, &app.page, &app.scroll, column, row);
    let (card, step) = classify(app, hit);

    for id in app.page.select_blocks(".product-card") {
        let lifted = Some(id) == card;
        let style = &mut app.page.block_mut(id).style;
        if style.lifted != lifted {
            style.lifted = lifted;
            dirty = true;
        }
    }
    for id in app.page.select_blocks(".process-step") {
        let hot = Some(id) == step;
        let style = &mut app.page.block_mut(id).style;
        if style.alt_background != hot {
            style.alt_background = hot;
            dirty = true;
        }
    }
    dirty
}

/// Which hoverable block, if either, the pointer is over
fn classify(app: &App, hit: Option<BlockId>) -> (Option<BlockId>, Option<BlockId>) {
    match hit {
        Some(id) if app.page.block(id).has_class("product-card") => (Some(id), None),
        Some(id) if app.page.block(id).has_class("process-step") => (None, Some(id)),
        _ => (None, None),
    }
}
