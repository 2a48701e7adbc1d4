//! Notification module for vitrine
//!
//! Transient overlay messages: config warnings at startup and the sample-kit
//! acknowledgement (the `alert()` stand-in).

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::NotificationState;
