//! Scroll reveal behavior

mod reveal_state;

pub use reveal_state::{ACTIVE_CLASS, REVEAL_SELECTOR, RevealState};
