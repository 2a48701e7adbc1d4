//! Small shared rendering helpers

pub mod popup;
