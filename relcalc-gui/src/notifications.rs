use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub(crate) const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone)]
pub(crate) struct Notification {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) created_at: Instant,
}

#[derive(Debug, Default)]
pub(crate) struct NotificationHandler {
    notifications: Vec<Notification>,
}

impl NotificationHandler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn show_info(&mut self, title: &str, message: &str) {
        self.notifications.push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            created_at: Instant::now(),
        });
    }

    pub(crate) fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub(crate) fn cleanup_old_notifications(&mut self, now: Instant) {
        self.notifications
            .retain(|n| now.duration_since(n.created_at) < NOTIFICATION_LIFETIME);
    }
}
