use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

/// Rect centered within a block's rows, narrowed to the given width
pub fn centered_in_rows(area: Rect, width: u16) -> Rect {
    let w = width.min(area.width);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        width: w,
        ..area
    }
}
