//! Fixed navigation bar with scroll shadow

mod navbar_render;
mod navbar_state;

pub use navbar_render::{NAVBAR_ROWS, render_navbar};
pub use navbar_state::NavbarState;
