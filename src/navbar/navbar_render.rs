//! Navbar rendering
//!
//! The bar is fixed chrome above the page: brand on the left, one link per
//! anchored section, and a rule underneath that brightens into the shadow
//! accent once the page scrolls. Returns the rendered link spans so mouse
//! handling can hit-test them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::layout::NavLink;
use crate::page::Page;
use crate::theme;

use super::navbar_state::NavbarState;

/// Height of the fixed bar: the link row plus the rule row
pub const NAVBAR_ROWS: u16 = 2;

const BRAND: &str = "❀ ROOTS";

pub fn render_navbar(
    frame: &mut Frame,
    area: Rect,
    page: &Page,
    navbar: &NavbarState,
) -> Vec<NavLink> {
    if area.height == 0 {
        return Vec::new();
    }

    let mut spans = vec![
        Span::styled(BRAND, theme::navbar::BRAND),
        Span::raw("    "),
    ];
    let mut links = Vec::new();
    let mut x = area.x + BRAND.chars().count() as u16 + 4;

    for (_, section) in page.sections() {
        let Some(anchor) = &section.anchor else {
            continue;
        };
        let label = link_label(anchor, links.len());
        let width = label.chars().count() as u16;
        let style = if navbar.hovered_link == Some(links.len()) {
            theme::navbar::LINK_HOVER
        } else {
            theme::navbar::LINK
        };
        links.push(NavLink {
            x_start: x,
            x_end: x + width,
            anchor: anchor.clone(),
        });
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
        x += width + 2;
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect { height: 1, ..area },
    );

    if area.height >= NAVBAR_ROWS {
        let rule_style = if navbar.has_shadow() {
            theme::navbar::RULE_SHADOW
        } else {
            theme::navbar::RULE
        };
        let rule = "─".repeat(area.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(rule, rule_style))),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }

    links
}

/// Display label for a nav link: numbered shortcut plus the anchor name
fn link_label(anchor: &str, index: usize) -> String {
    let mut chars = anchor.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{}:{}", index + 1, capitalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_labels_are_numbered_shortcuts() {
        assert_eq!(link_label("home", 0), "1:Home");
        assert_eq!(link_label("products", 1), "2:Products");
        assert_eq!(link_label("why", 3), "4:Why");
    }
}
