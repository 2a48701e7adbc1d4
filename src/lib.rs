//! vitrine library - Terminal showcase page
//!
//! This library exposes the page model and behaviors for testing purposes.

pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod layout;
pub mod navbar;
pub mod notification;
pub mod overlay;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod viewport;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
