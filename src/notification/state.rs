use std::time::{Duration, Instant};

/// How long a notification stays on screen by default
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any notification already visible
    pub fn show(&mut self, message: &str) {
        self.show_for(message, DEFAULT_DURATION);
    }

    pub fn show_for(&mut self, message: &str, duration: Duration) {
        self.current = Some(Notification {
            message: message.to_string(),
            created_at: Instant::now(),
            duration,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the notification once its time is up
    pub fn clear_if_expired(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
