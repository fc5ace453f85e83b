//! Queue behind the notification surface.
//!
//! Each notification carries its own deadline so the queue can be
//! expired from a timer callback or from a clock read, whichever fires.

use crate::config::NOTIFICATION_TIMEOUT_MS;
use crate::types::{Notice, NoticeKind};

/// A notice on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    /// Epoch milliseconds after which the notification is gone
    pub expires_at_ms: f64,
}

impl Notification {
    /// Bootstrap classes of the alert element.
    pub fn css_class(&self) -> String {
        format!("alert {} alert-dismissible fade show", self.kind.css_class())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, returning its id.
    pub fn push(&mut self, notice: Notice, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind: notice.kind,
            message: notice.message,
            expires_at_ms: now_ms + f64::from(NOTIFICATION_TIMEOUT_MS),
        });
        id
    }

    /// Remove one notification. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification whose deadline has passed.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at_ms > now_ms);
        before - self.items.len()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_expires_within_timeout() {
        let mut queue = NotificationQueue::new();
        let kinds = [
            NoticeKind::Success,
            NoticeKind::Info,
            NoticeKind::Warning,
            NoticeKind::Danger,
        ];
        for kind in kinds {
            queue.push(Notice::new(kind, "hello"), 1_000.0);
        }

        assert_eq!(queue.expire(5_999.0), 0);
        assert_eq!(queue.items().len(), 4);
        assert_eq!(queue.expire(6_000.0), 4);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expire_only_drops_old_notifications() {
        let mut queue = NotificationQueue::new();
        queue.push(Notice::info("old"), 0.0);
        queue.push(Notice::info("new"), 3_000.0);

        assert_eq!(queue.expire(5_000.0), 1);
        assert_eq!(queue.items()[0].message, "new");
    }

    #[test]
    fn test_dismiss_before_timeout() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notice::success("Saved"), 0.0);
        let second = queue.push(Notice::danger("Failed"), 0.0);
        assert_ne!(first, second);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].css_class(), "alert alert-danger alert-dismissible fade show");
    }
}
