use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::notification::domain::{
    MarkReadOutcome, Notification, NotificationFeed, NotificationId,
};
use crate::modules::notification::ports::{NotificationError, NotificationRepository};

/// 内存通知仓储
///
/// 进程生命周期内有效，不做持久化
pub struct InMemoryNotificationRepository {
    feed: RwLock<NotificationFeed>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self {
            feed: RwLock::new(NotificationFeed::new()),
        }
    }

    pub fn with_feed(feed: NotificationFeed) -> Self {
        Self {
            feed: RwLock::new(feed),
        }
    }
}

impl Default for InMemoryNotificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn prepend(&self, notification: &Notification) -> Result<(), NotificationError> {
        let mut feed = self.feed.write().await;
        if feed.get(notification.id()).is_some() {
            return Err(NotificationError::Conflict(notification.id().to_string()));
        }
        feed.prepend(notification.clone());
        Ok(())
    }

    async fn mark_as_read(&self, id: NotificationId) -> Result<MarkReadOutcome, NotificationError> {
        Ok(self.feed.write().await.mark_as_read(id))
    }

    async fn mark_all_as_read(&self) -> Result<usize, NotificationError> {
        Ok(self.feed.write().await.mark_all_as_read())
    }

    async fn clear(&self) -> Result<usize, NotificationError> {
        Ok(self.feed.write().await.clear())
    }

    async fn list(&self) -> Result<Vec<Notification>, NotificationError> {
        Ok(self.feed.read().await.entries().to_vec())
    }

    async fn get(&self, id: NotificationId) -> Result<Option<Notification>, NotificationError> {
        Ok(self.feed.read().await.get(id).cloned())
    }

    async fn unread_count(&self) -> Result<usize, NotificationError> {
        Ok(self.feed.read().await.unread_count())
    }

    async fn count(&self) -> Result<usize, NotificationError> {
        Ok(self.feed.read().await.len())
    }

    async fn snapshot(&self) -> Result<NotificationFeed, NotificationError> {
        Ok(self.feed.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::notification::domain::NotificationKind;
    use crate::modules::notification::infrastructure::seed_history;

    #[tokio::test]
    async fn test_prepend_and_list() {
        let repo = InMemoryNotificationRepository::new();
        let older = Notification::new(NotificationKind::Task, "Task Updated", "moved", None);
        let newer = Notification::new(NotificationKind::Message, "New Message", "hi", None);

        repo.prepend(&older).await.unwrap();
        repo.prepend(&newer).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].id(), newer.id());
        assert_eq!(listed[1].id(), older.id());
        assert_eq!(repo.unread_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_matches_entries() {
        let repo = InMemoryNotificationRepository::with_feed(seed_history());

        let snapshot = repo.snapshot().await.unwrap();
        assert_eq!(snapshot.entries(), repo.list().await.unwrap().as_slice());
        assert_eq!(snapshot.unread_count(), 2);
    }

    #[tokio::test]
    async fn test_prepend_duplicate_rejected() {
        let repo = InMemoryNotificationRepository::new();
        let notification = Notification::new(NotificationKind::System, "t", "b", None);

        repo.prepend(&notification).await.unwrap();
        let result = repo.prepend(&notification).await;

        assert!(matches!(result, Err(NotificationError::Conflict(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
