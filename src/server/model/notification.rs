//! Notification domain types and parameters.

/// Kind of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Attendance penalty issued by the auditor.
    Warning,
    /// Positive registration traffic to an organizer.
    Success,
    /// Registration cancellation traffic to an organizer.
    Sorry,
}

impl NotificationKind {
    /// Returns the stored string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "warning",
            NotificationKind::Success => "success",
            NotificationKind::Sorry => "sorry",
        }
    }
}

/// Parameters for appending a notification record.
///
/// Notifications are append-only from this crate's perspective; `read` and
/// `toast_shown` start false and are mutated by read/ack surfaces elsewhere.
#[derive(Debug, Clone)]
pub struct NewNotificationParam {
    /// Email of the recipient.
    pub email: String,
    /// Short headline shown to the user.
    pub message: String,
    /// Explanatory text naming the event concerned.
    pub reason: String,
    /// Kind of the notification.
    pub kind: NotificationKind,
}
