//! Cosmetic overlays: hero grain texture and product-image radial highlight

mod overlay_render;

pub use overlay_render::{grain_at, radial_at, render_grain, render_radial};
