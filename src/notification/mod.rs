//! Notification module for calcterm
//!
//! Provides transient messages (copy confirmations, evaluation errors,
//! config warnings) drawn over the top-right corner of the screen.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationState};
