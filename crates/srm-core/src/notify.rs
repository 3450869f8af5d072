//! Notification plumbing for simulated mutating actions
//!
//! Actions like "add student" or "enroll student" only raise a notification;
//! no collection is mutated. The sink trait is the seam a toast UI plugs
//! into, and [`NotificationLog`] is the in-memory implementation backing the
//! overview screen's recent-activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Unique identifier for a notification
pub type NotificationId = Uuid;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A human-readable title/description pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,

    /// Short headline, e.g. "Student Added"
    pub title: String,

    /// One-sentence body
    pub description: String,

    /// Severity
    pub kind: NotificationKind,

    /// When the notification was raised
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification raised now
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            kind,
            raised_at: Utc::now(),
        }
    }

    /// Shorthand for a success notification
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    /// Shorthand for an info notification
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, description)
    }

    /// Shorthand for a warning notification
    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, description)
    }
}

/// Collaborator informed after simulated mutating actions
///
/// The core does not validate or act on what the sink does with a
/// notification.
pub trait NotificationSink: Send + Sync {
    fn notify(&mut self, notification: Notification);
}

/// In-memory sink retaining the most recent notifications, newest first
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: Vec<Notification>,
    capacity: usize,
}

impl NotificationLog {
    /// Create a log with the default retention
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Create a log retaining at most `capacity` notifications
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// The most recent `count` notifications, newest first
    pub fn recent(&self, count: usize) -> &[Notification] {
        &self.entries[..count.min(self.entries.len())]
    }

    /// All retained notifications, newest first
    pub fn all(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of retained notifications
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every retained notification
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        info!("notification: {} - {}", notification.title, notification.description);
        self.entries.insert(0, notification);
        self.entries.truncate(self.capacity);
    }
}
