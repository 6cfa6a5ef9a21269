//! User notification surface
//!
//! The export workflow reports to the user at fixed points: a pre-flight
//! acknowledgment of the selection, a success or failure notice, and a final
//! "process ended" notice. How those notices are shown is up to the
//! [`Notifier`] implementation.

pub mod console;
pub mod recording;

pub use console::ConsoleNotifier;
pub use recording::RecordingNotifier;

use std::fmt;

/// Severity of a user notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Failure => write!(f, "failure"),
            NotificationKind::Info => write!(f, "info"),
        }
    }
}

/// A notice shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
}

impl Notification {
    /// Create a notice with an optional message
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message,
        }
    }
}

/// Shows notices to the user
///
/// Notifying is synchronous and infallible from the caller's point of view;
/// an implementation that cannot display a notice should log and move on.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, message: Option<&str>);
}
