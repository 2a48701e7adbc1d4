//! Page scrolling: offset state plus the smooth-scroll glide

mod glide;
mod scroll_state;

pub use glide::Glide;
pub use scroll_state::ScrollState;
