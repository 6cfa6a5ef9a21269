//! Recording notifier

use super::{Notification, NotificationKind, Notifier};
use std::sync::Mutex;

/// Keeps every notice in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far
    pub fn notices(&self) -> Vec<Notification> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Titles of all notices received so far
    pub fn titles(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.title).collect()
    }

    /// Number of notices carrying `title`
    pub fn count_titled(&self, title: &str) -> usize {
        self.notices().iter().filter(|n| n.title == title).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: Option<&str>) {
        match self.notices.lock() {
            Ok(mut notices) => notices.push(Notification::new(
                kind,
                title,
                message.map(str::to_string),
            )),
            Err(_) => tracing::warn!(title = %title, "Recording notifier lock poisoned"),
        }
    }
}
