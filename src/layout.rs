//! Screen layout: where the fixed chrome and the page live this frame

mod layout_regions;

pub use layout_hit_test::{block_at, nav_link_at};
pub use layout_regions::{LayoutRegions, NavLink};
