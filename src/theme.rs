//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Harvest - cream and petal tones with deep green and brushed gold

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(236, 231, 219);
    pub const TEXT_DIM: Color = Color::Rgb(110, 112, 100);
    pub const TEXT_MUTED: Color = Color::Rgb(160, 158, 142);

    // Background colors
    pub const BG_DARK: Color = Color::Rgb(22, 28, 26);
    pub const BG_SURFACE: Color = Color::Rgb(30, 38, 35);
    pub const BG_HOVER: Color = Color::Rgb(44, 56, 51);

    // Brand colors from the site palette
    pub const SOFT_CREAM: Color = Color::Rgb(247, 242, 230);
    pub const PASTEL_PETAL: Color = Color::Rgb(244, 218, 223);
    pub const DEEP_GREEN: Color = Color::Rgb(16, 68, 62);
    pub const GOLD: Color = Color::Rgb(178, 147, 97);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
}

/// Fixed top navigation bar
pub mod navbar {
    use super::*;

    pub const BRAND: Style = Style::new()
        .fg(palette::GOLD)
        .add_modifier(Modifier::BOLD);
    pub const LINK: Style = Style::new().fg(palette::SOFT_CREAM);
    pub const LINK_HOVER: Style = Style::new()
        .fg(palette::GOLD)
        .add_modifier(Modifier::UNDERLINED);
    // Shadow analog: the rule under the bar brightens once the page scrolls
    pub const RULE: Style = Style::new().fg(palette::BG_SURFACE);
    pub const RULE_SHADOW: Style = Style::new().fg(palette::GOLD);
}

/// Hero section
pub mod hero {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(palette::SOFT_CREAM)
        .add_modifier(Modifier::BOLD);
    pub const TITLE_FADED: Style = Style::new().fg(palette::TEXT_DIM);
    pub const TAGLINE: Style = Style::new().fg(palette::PASTEL_PETAL);
    pub const TAGLINE_FADED: Style = Style::new().fg(palette::TEXT_DIM);
    pub const GRAIN: Style = Style::new().fg(palette::BG_HOVER);
}

/// Product cards and their image placeholders
pub mod cards {
    use super::*;

    pub const CARD: Style = Style::new().fg(palette::TEXT);
    pub const CARD_LIFTED: Style = Style::new()
        .fg(palette::SOFT_CREAM)
        .bg(palette::BG_HOVER)
        .add_modifier(Modifier::BOLD);
    pub const IMAGE: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const GRADIENT: Style = Style::new().fg(palette::PASTEL_PETAL);
}

/// Process steps
pub mod process {
    use super::*;

    pub const STEP: Style = Style::new().fg(palette::TEXT);
    pub const STEP_HOVER: Style = Style::new()
        .fg(palette::DEEP_GREEN)
        .bg(palette::SOFT_CREAM);
}

/// Statistic displays
pub mod stats {
    use super::*;

    pub const NUMBER: Style = Style::new()
        .fg(palette::GOLD)
        .add_modifier(Modifier::BOLD);
    pub const LABEL: Style = Style::new().fg(palette::TEXT_MUTED);
}

/// Body copy and everything without a more specific style
pub mod body {
    use super::*;

    pub const TEXT: Style = Style::new().fg(palette::TEXT);
    pub const HEADING: Style = Style::new()
        .fg(palette::GOLD)
        .add_modifier(Modifier::BOLD);
    pub const FOOTER: Style = Style::new().fg(palette::TEXT_DIM);
}

/// Notification overlay styles
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::SOFT_CREAM;
    pub const INFO_BG: Color = palette::DEEP_GREEN;
    pub const INFO_BORDER: Color = palette::GOLD;

    pub const WARNING_FG: Color = Color::Rgb(20, 20, 20);
    pub const WARNING_BG: Color = palette::WARNING;
    pub const WARNING_BORDER: Color = palette::WARNING;
}
