//! Parallax hero behavior

mod parallax_state;

pub use parallax_state::ParallaxState;
