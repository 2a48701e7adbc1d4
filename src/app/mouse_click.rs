//! Mouse click handling
//!
//! Navbar links glide the page to their section; the sample-kit button shows
//! its acknowledgement notification. Clicks anywhere else do nothing.

use crate::layout::{block_at, nav_link_at};

use super::app_state::App;

const SAMPLE_KIT_MESSAGE: &str =
    "Sample kit requests are coming soon! Mention \"Sample Kit\" in your message.";

/// Handle a left click at the given position; returns whether anything changed
pub fn handle_click(app: &mut App, column: u16, row: u16) -> bool {
    if let Some((_, link)) = nav_link_at(&app.layout_regions, column, row) {
        let anchor = link.anchor.clone();
        return app.glide_to_anchor(&anchor);
    }

    if let Some(id) = block_at(&app.layout_regions, &app.page, &app.scroll, column, row)
        && app.page.block(id).has_class("btn-sample-kit")
    {
        app.notification.show(SAMPLE_KIT_MESSAGE);
        return true;
    }

    false
}
