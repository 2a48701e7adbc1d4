//! Viewport intersection module
//!
//! The terminal analog of viewport intersection detection: given the scroll
//! offset and viewport height, compute how much of a row extent is visible,
//! and surface threshold crossings as events. Observers are polled from the
//! event loop rather than called back; subscriptions are repeat-fire, and
//! one-shot behavior is the subscriber's business (a class marker).

mod intersection;
mod observer;

pub use intersection::visible_fraction;
pub use observer::{IntersectionEvent, IntersectionObserver};
