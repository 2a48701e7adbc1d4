//! Notification rendering
//!
//! Renders the current notification as a small bordered box in the top-right
//! corner, above the page. Call after the page so it floats on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::widgets::popup;

use super::notification_state::NotificationState;

pub fn render_notification(frame: &mut Frame, notification: &NotificationState) {
    let Some(notif) = notification.current() else {
        return;
    };

    let message = &notif.message;
    let style = &notif.style;

    // message + 2 cells padding + 2 border cells
    let width = message.chars().count() as u16 + 4;
    let height = 3;

    let frame_area = frame.area();
    let margin = 2;
    let area = Rect {
        x: frame_area.width.saturating_sub(width + margin),
        y: margin,
        width: width.min(frame_area.width.saturating_sub(margin * 2)),
        height: height.min(frame_area.height.saturating_sub(margin * 2)),
    };
    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));
    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
