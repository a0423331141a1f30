// Notification Center
//
// 进程内唯一的通知流服务，构造一次后以 Arc 注入到所有生产者与消费者

use chrono::Utc;
use std::sync::Arc;

use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::notification::domain::{
    MarkReadOutcome, Notification, NotificationDomainEvent, NotificationFeed, NotificationId,
    NotificationKind, NotificationSender,
};
use crate::modules::notification::infrastructure::InMemoryNotificationRepository;
use crate::modules::notification::ports::{
    NotificationError, NotificationRepository, Toast, ToastPort, DEFAULT_TOAST_DURATION_MS,
};

pub struct NotificationCenter {
    repository: Arc<dyn NotificationRepository>,
    toast: Arc<dyn ToastPort>,
    event_bus: Arc<EventBus>,
    toast_duration_ms: u64,
}

impl NotificationCenter {
    pub fn new(
        repository: Arc<dyn NotificationRepository>,
        toast: Arc<dyn ToastPort>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            repository,
            toast,
            event_bus,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    /// 使用内存仓储创建，`history` 为启动时的历史条目
    pub fn in_memory(
        history: NotificationFeed,
        toast: Arc<dyn ToastPort>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let repository = Arc::new(InMemoryNotificationRepository::with_feed(history));
        Self::new(repository, toast, event_bus)
    }

    pub fn with_toast_duration_ms(mut self, duration_ms: u64) -> Self {
        self.toast_duration_ms = duration_ms;
        self
    }

    /// 新增通知：插入最前并触发一次 Toast
    pub async fn add_notification(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        sender: Option<NotificationSender>,
    ) -> Result<Notification, NotificationError> {
        let notification = Notification::new(kind, title, body, sender);
        self.repository.prepend(&notification).await?;

        let unread_count = self.repository.unread_count().await?;
        tracing::info!(
            "[NotificationCenter] Added {} notification {} (unread: {})",
            kind.as_str(),
            notification.id(),
            unread_count
        );

        self.event_bus
            .publish(AppEvent::Notification(NotificationDomainEvent::Added {
                notification_id: notification.id(),
                kind,
                unread_count,
                timestamp: notification.timestamp(),
            }));

        self.toast.show_transient_banner(
            Toast::new(notification.title(), notification.body())
                .with_duration_ms(self.toast_duration_ms),
        );

        Ok(notification)
    }

    /// 标记单条已读；ID 不存在或已读时不做任何修改
    pub async fn mark_as_read(
        &self,
        id: NotificationId,
    ) -> Result<MarkReadOutcome, NotificationError> {
        let outcome = self.repository.mark_as_read(id).await?;

        match outcome {
            MarkReadOutcome::Marked => self.publish_feed_changed().await?,
            MarkReadOutcome::AlreadyRead => {}
            MarkReadOutcome::NotFound => {
                tracing::debug!("[NotificationCenter] mark_as_read: {} not in feed", id);
            }
        }

        Ok(outcome)
    }

    pub async fn mark_all_as_read(&self) -> Result<usize, NotificationError> {
        let changed = self.repository.mark_all_as_read().await?;
        if changed > 0 {
            self.publish_feed_changed().await?;
        }
        Ok(changed)
    }

    /// 清空通知流
    pub async fn clear(&self) -> Result<usize, NotificationError> {
        let removed = self.repository.clear().await?;
        tracing::info!("[NotificationCenter] Cleared {} notifications", removed);
        if removed > 0 {
            self.publish_feed_changed().await?;
        }
        Ok(removed)
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>, NotificationError> {
        self.repository.list().await
    }

    pub async fn get(&self, id: NotificationId) -> Result<Option<Notification>, NotificationError> {
        self.repository.get(id).await
    }

    /// 条目与未读数取自同一时刻
    pub async fn snapshot(&self) -> Result<NotificationFeed, NotificationError> {
        self.repository.snapshot().await
    }

    pub async fn unread_count(&self) -> Result<usize, NotificationError> {
        self.repository.unread_count().await
    }

    async fn publish_feed_changed(&self) -> Result<(), NotificationError> {
        let feed = self.repository.snapshot().await?;
        let unread_count = feed.unread_count();
        let total = feed.len();

        self.event_bus
            .publish(AppEvent::Notification(NotificationDomainEvent::FeedChanged {
                unread_count,
                total,
                timestamp: Utc::now(),
            }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::notification::infrastructure::seed_history;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingToast {
        shown: Mutex<Vec<Toast>>,
    }

    impl ToastPort for RecordingToast {
        fn show_transient_banner(&self, toast: Toast) {
            self.shown.lock().unwrap().push(toast);
        }
    }

    fn center_with(history: NotificationFeed) -> (NotificationCenter, Arc<RecordingToast>) {
        let toast = Arc::new(RecordingToast::default());
        let center = NotificationCenter::in_memory(history, toast.clone(), Arc::new(EventBus::new()));
        (center, toast)
    }

    async fn assert_unread_matches_feed(center: &NotificationCenter) {
        let feed = center.notifications().await.unwrap();
        let expected = feed.iter().filter(|n| !n.is_read()).count();
        assert_eq!(center.unread_count().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_add_notification_prepends_and_toasts() {
        let (center, toast) = center_with(seed_history());

        let added = center
            .add_notification(
                NotificationKind::Message,
                "New Message",
                "Sarah Johnson: Thanks for your message!",
                Some(NotificationSender::new("Sarah Johnson")),
            )
            .await
            .unwrap();

        assert!(!added.is_read());
        let feed = center.notifications().await.unwrap();
        assert_eq!(feed.len(), 4);
        assert_eq!(feed[0].id(), added.id());
        assert_eq!(center.unread_count().await.unwrap(), 3);

        let shown = toast.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "New Message");
        assert_eq!(shown[0].body, "Sarah Johnson: Thanks for your message!");
        assert_eq!(shown[0].duration_ms, 5000);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let (center, _) = center_with(NotificationFeed::new());

        let a = center
            .add_notification(NotificationKind::System, "a", "a", None)
            .await
            .unwrap();
        let b = center
            .add_notification(NotificationKind::System, "b", "b", None)
            .await
            .unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_mark_as_read_twice() {
        let (center, _) = center_with(NotificationFeed::new());
        let added = center
            .add_notification(NotificationKind::Task, "Task Updated", "moved", None)
            .await
            .unwrap();

        assert_eq!(
            center.mark_as_read(added.id()).await.unwrap(),
            MarkReadOutcome::Marked
        );
        let after_first = center.notifications().await.unwrap();

        assert_eq!(
            center.mark_as_read(added.id()).await.unwrap(),
            MarkReadOutcome::AlreadyRead
        );
        assert_eq!(center.notifications().await.unwrap(), after_first);
        assert_eq!(center.unread_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_mark_as_read_missing_id_is_noop() {
        let (center, _) = center_with(seed_history());
        let before = center.notifications().await.unwrap();

        let outcome = center.mark_as_read(NotificationId::new()).await.unwrap();

        assert_eq!(outcome, MarkReadOutcome::NotFound);
        assert_eq!(center.notifications().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_mark_all_as_read() {
        let (center, _) = center_with(seed_history());
        center
            .add_notification(NotificationKind::Document, "Document Shared", "doc", None)
            .await
            .unwrap();
        assert_unread_matches_feed(&center).await;

        assert_eq!(center.mark_all_as_read().await.unwrap(), 3);
        assert_eq!(center.unread_count().await.unwrap(), 0);
        assert_unread_matches_feed(&center).await;
    }

    #[tokio::test]
    async fn test_clear_three_unread_entries() {
        let (center, _) = center_with(NotificationFeed::new());
        for title in ["one", "two", "three"] {
            center
                .add_notification(NotificationKind::System, title, "body", None)
                .await
                .unwrap();
        }
        assert_eq!(center.unread_count().await.unwrap(), 3);

        assert_eq!(center.clear().await.unwrap(), 3);
        assert!(center.notifications().await.unwrap().is_empty());
        assert_eq!(center.unread_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_feed_changed_events() {
        let event_bus = Arc::new(EventBus::new());
        let mut rx = event_bus.subscribe();
        let center = NotificationCenter::in_memory(
            NotificationFeed::new(),
            Arc::new(RecordingToast::default()),
            event_bus,
        );

        let added = center
            .add_notification(NotificationKind::Message, "t", "b", None)
            .await
            .unwrap();
        center.mark_as_read(added.id()).await.unwrap();

        match rx.recv().await.unwrap() {
            AppEvent::Notification(event) => {
                assert_eq!(event.event_type(), "notification.added");
                assert_eq!(event.unread_count(), 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        match rx.recv().await.unwrap() {
            AppEvent::Notification(event) => {
                assert_eq!(event.event_type(), "notification.feed_changed");
                assert_eq!(event.unread_count(), 0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_toast_duration() {
        let toast = Arc::new(RecordingToast::default());
        let center = NotificationCenter::in_memory(
            NotificationFeed::new(),
            toast.clone(),
            Arc::new(EventBus::new()),
        )
        .with_toast_duration_ms(3000);

        center
            .add_notification(NotificationKind::System, "t", "b", None)
            .await
            .unwrap();

        assert_eq!(toast.shown.lock().unwrap()[0].duration_ms, 3000);
    }
}
