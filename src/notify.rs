use std::time::Duration;

/// How long a notification stays on screen unless dismissed earlier.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Success, message)
    }

    /// Returns false when the notification was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
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
    fn test_push_and_dismiss() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        let a = queue.success("first");
        let b = queue.success("second");
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(queue.items().len(), 2);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items()[0].message, "second");
        assert_eq!(queue.items()[0].kind, NotificationKind::Success);

        assert!(queue.dismiss(b));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = NotificationQueue::new();
        let a = queue.success("a");
        queue.dismiss(a);
        let b = queue.success("b");
        assert!(b > a);
    }
}
