//! Per-session notifications and the unread badge count.

pub mod client;
pub mod types;

pub use types::Notification;

/// Notifications not yet marked as read.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
