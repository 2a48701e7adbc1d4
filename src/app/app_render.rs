//! Page rendering
//!
//! Draws the fixed navbar, then the visible slice of the page, then the
//! cosmetic overlays and any notification on top. Records where everything
//! landed for mouse hit-testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block as Widget, Paragraph};

use crate::layout::LayoutRegions;
use crate::navbar::{NAVBAR_ROWS, render_navbar};
use crate::notification::render_notification;
use crate::overlay::{render_grain, render_radial};
use crate::page::{Block, BlockId};
use crate::theme;
use crate::widgets::popup;

use super::app_state::App;

/// Width of the product image placeholder box
const IMAGE_WIDTH: u16 = 24;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let frame_area = frame.area();
        frame.render_widget(
            Widget::default().style(Style::default().bg(theme::palette::BG_DARK)),
            frame_area,
        );

        let navbar_area = Rect {
            height: NAVBAR_ROWS.min(frame_area.height),
            ..frame_area
        };
        let page_area = Rect {
            y: frame_area.y + navbar_area.height,
            height: frame_area.height.saturating_sub(navbar_area.height),
            ..frame_area
        };

        self.scroll
            .update_bounds(self.page.total_rows(), page_area.height);

        let links = render_navbar(frame, navbar_area, &self.page, &self.navbar);
        self.layout_regions = LayoutRegions {
            navbar: Some(navbar_area),
            page: Some(page_area),
            links,
        };

        let block_ids: Vec<BlockId> = self.page.blocks().map(|(id, _)| id).collect();
        for id in block_ids {
            self.render_block(frame, page_area, id);
        }

        self.render_overlays(frame, page_area);
        render_notification(frame, &self.notification);
    }

    /// Draw the visible rows of one block
    fn render_block(&self, frame: &mut Frame, area: Rect, id: BlockId) {
        let block = self.page.block(id);
        let extent = self.page.block_extent(id);
        let offset = self.scroll.offset;

        let vis_top = extent.top.max(offset);
        let vis_bottom = extent.bottom().min(offset + area.height);
        if vis_bottom <= vis_top {
            return;
        }

        // unrevealed blocks stay invisible
        if block.has_class("reveal") && !block.has_class("active") {
            return;
        }

        if block.has_class("product-image") {
            self.render_image(frame, area, vis_top, vis_bottom);
            return;
        }

        let align = block_alignment(block);
        for (index, text) in block.lines.iter().enumerate() {
            // parallax shifts lines down within the block's own rows
            let page_row = extent.top + block.style.offset_rows + index as u16;
            if page_row < vis_top || page_row >= vis_bottom {
                continue;
            }
            let rect = Rect {
                y: area.y + (page_row - offset),
                height: 1,
                ..area
            };
            let style = line_style(block, index);
            let line = match align {
                Alignment::Left => Line::from(Span::styled(format!("  {}", text), style)),
                _ => Line::from(Span::styled(text.clone(), style)),
            };
            frame.render_widget(Paragraph::new(line).alignment(align), rect);
        }
    }

    /// Product image placeholder: a filled box with its radial highlight
    fn render_image(&self, frame: &mut Frame, area: Rect, vis_top: u16, vis_bottom: u16) {
        let offset = self.scroll.offset;
        let full = Rect {
            y: area.y + (vis_top - offset),
            height: vis_bottom - vis_top,
            ..area
        };
        let box_rect = popup::centered_in_rows(full, IMAGE_WIDTH.min(area.width));
        let fill = "░".repeat(box_rect.width as usize);
        for y in box_rect.y..box_rect.y + box_rect.height {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(fill.clone(), theme::cards::IMAGE))),
                Rect {
                    y,
                    height: 1,
                    ..box_rect
                },
            );
        }
        render_radial(frame, box_rect);
    }

    /// Grain texture over the visible part of the hero
    fn render_overlays(&self, frame: &mut Frame, area: Rect) {
        let offset = self.scroll.offset;
        for id in self.page.select_sections(".hero") {
            let extent = self.page.section_extent(id);
            let vis_top = extent.top.max(offset);
            let vis_bottom = extent.bottom().min(offset + area.height);
            if vis_bottom <= vis_top {
                continue;
            }
            render_grain(
                frame,
                Rect {
                    y: area.y + (vis_top - offset),
                    height: vis_bottom - vis_top,
                    ..area
                },
            );
        }
    }
}

/// Horizontal alignment for a block's text
fn block_alignment(block: &Block) -> Alignment {
    const CENTERED: [&str; 6] = [
        "hero-content",
        "section-heading",
        "stat-number",
        "stat-label",
        "btn-sample-kit",
        "footer-note",
    ];
    if CENTERED.iter().any(|c| block.has_class(c)) {
        Alignment::Center
    } else {
        Alignment::Left
    }
}

/// Style for one line of a block, from its classes and style props
fn line_style(block: &Block, line_index: usize) -> Style {
    if block.has_class("hero-content") {
        let faded = block.style.fade >= 60;
        return match (line_index, faded) {
            (0, false) => theme::hero::TITLE,
            (0, true) => theme::hero::TITLE_FADED,
            (_, false) => theme::hero::TAGLINE,
            (_, true) => theme::hero::TAGLINE_FADED,
        };
    }
    if block.has_class("product-card") {
        return if block.style.lifted {
            theme::cards::CARD_LIFTED
        } else {
            theme::cards::CARD
        };
    }
    if block.has_class("process-step") {
        return if block.style.alt_background {
            theme::process::STEP_HOVER
        } else {
            theme::process::STEP
        };
    }
    if block.has_class("stat-number") {
        return theme::stats::NUMBER;
    }
    if block.has_class("stat-label") {
        return theme::stats::LABEL;
    }
    if block.has_class("section-heading") {
        return theme::body::HEADING;
    }
    if block.has_class("btn-sample-kit") || block.has_class("form-actions") {
        return theme::navbar::BRAND;
    }
    if block.has_class("footer-note") {
        return theme::body::FOOTER;
    }
    theme::body::TEXT
}
