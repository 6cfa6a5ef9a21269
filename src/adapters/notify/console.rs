//! Console notifier

use super::{NotificationKind, Notifier};

/// Prints notices to stdout and mirrors them as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    fn glyph(kind: NotificationKind) -> &'static str {
        match kind {
            NotificationKind::Success => "✅",
            NotificationKind::Failure => "❌",
            NotificationKind::Info => "ℹ️ ",
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: Option<&str>) {
        match message {
            Some(message) => println!("{} {title}: {message}", Self::glyph(kind)),
            None => println!("{} {title}", Self::glyph(kind)),
        }

        match kind {
            NotificationKind::Failure => {
                tracing::warn!(kind = %kind, title = %title, message = ?message, "User notified")
            }
            _ => tracing::debug!(kind = %kind, title = %title, message = ?message, "User notified"),
        }
    }
}
