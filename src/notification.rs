//! Decode/encode diagnostics.
//!
//! Non-fatal issues met while reading or writing (unknown group codes,
//! unparseable values, corrected defaults) are collected as `Notification`
//! items instead of being dropped or turned into hard errors. Comment
//! records (group 999) travel on the same channel with their own type so a
//! presentation layer can print them.
//!
//! Every notification is mirrored to `tracing` at a matching level.

use std::fmt;

/// Severity / category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// An entity type has no registered codec and was skipped.
    NotImplemented,
    /// Non-fatal warning (unknown group code, bad value, corrected default).
    Warning,
    /// Error that was recovered from (e.g. an entity skipped on encode).
    Error,
    /// Text of a group 999 comment record.
    Comment,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
            Self::Comment => write!(f, "Comment"),
        }
    }
}

/// A single notification produced during reading or writing.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during a read/write operation, in order.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        let message = message.into();
        match notification_type {
            NotificationType::Error => tracing::error!("{}", message),
            NotificationType::Warning | NotificationType::NotImplemented => {
                tracing::warn!("{}", message)
            }
            NotificationType::Comment => tracing::debug!(comment = %message, "comment record"),
        }
        self.items.push(Notification::new(notification_type, message));
    }

    /// Record a recoverable warning attributed to `context`.
    pub fn warn(&mut self, context: impl fmt::Display, message: impl fmt::Display) {
        self.notify(NotificationType::Warning, format!("{}: {}", context, message));
    }

    /// Record the text of a comment record.
    pub fn comment(&mut self, text: impl Into<String>) {
        self.notify(NotificationType::Comment, text);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Texts of the comment records, in stream order.
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|n| n.notification_type == NotificationType::Comment)
            .map(|n| n.message.as_str())
    }

}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
