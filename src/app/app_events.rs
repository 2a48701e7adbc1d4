use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::mouse_click;
use super::mouse_hover;
use super::app_state::App;

/// Timeout for event polling; doubles as the animation tick resolution
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: u16 = 3;

impl App {
    /// Handle at most one terminal event, waiting up to one tick for it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll.scroll_down(1);
                self.mark_dirty();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll.scroll_up(1);
                self.mark_dirty();
            }
            KeyCode::Char('d') | KeyCode::PageDown => {
                self.scroll.page_down();
                self.mark_dirty();
            }
            KeyCode::Char('u') | KeyCode::PageUp => {
                self.scroll.page_up();
                self.mark_dirty();
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll.jump_to_top();
                self.mark_dirty();
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll.jump_to_bottom();
                self.mark_dirty();
            }
            // 1..9 glide to the matching nav link's section
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(anchor) = self.anchors().get(index).cloned()
                    && self.glide_to_anchor(&anchor)
                {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Handle mouse events: wheel scroll, hover, and clicks
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll.scroll_down(WHEEL_ROWS);
                self.mark_dirty();
            }
            MouseEventKind::ScrollUp => {
                self.scroll.scroll_up(WHEEL_ROWS);
                self.mark_dirty();
            }
            MouseEventKind::Moved => {
                if mouse_hover::handle_hover(self, mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse_click::handle_click(self, mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::page::demo_page;

    fn test_app() -> App {
        let mut app = App::new(demo_page(), &Config::default());
        // simulate a first render so geometry exists
        app.scroll.update_bounds(app.page.total_rows(), 22);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = test_app();
            app.handle_key_event(key(code));
            assert!(app.should_quit());
        }

        let mut app = test_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('j')));
        assert_eq!(app.scroll.offset, 1);
        app.handle_key_event(key(KeyCode::Char('k')));
        assert_eq!(app.scroll.offset, 0);

        app.handle_key_event(key(KeyCode::Char('G')));
        assert_eq!(app.scroll.offset, app.scroll.max_offset);
        app.handle_key_event(key(KeyCode::Char('g')));
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_digit_key_starts_glide_to_section() {
        let mut app = test_app();
        // "2" is the products section
        app.handle_key_event(key(KeyCode::Char('2')));
        assert!(app.scroll.is_gliding());

        while app.scroll.tick_glide() {}
        let products = app.page.anchor_target("products").unwrap();
        assert_eq!(app.scroll.offset, app.page.section_extent(products).top);
    }

    #[test]
    fn test_digit_key_past_last_anchor_no_ops() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('9')));
        assert!(!app.scroll.is_gliding());
    }

    #[test]
    fn test_wheel_scrolls_three_rows() {
        let mut app = test_app();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };
        app.handle_mouse_event(wheel);
        assert_eq!(app.scroll.offset, 3);
    }
}
