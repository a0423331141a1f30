// 启动时载入的历史通知

use chrono::{Duration, Utc};

use crate::modules::notification::domain::{
    Notification, NotificationFeed, NotificationKind, NotificationSender,
};

pub fn seed_history() -> NotificationFeed {
    let now = Utc::now();

    NotificationFeed::from_entries(vec![
        Notification::restore(
            NotificationKind::Message,
            "New Message",
            "You have a new message from Sarah",
            Some(
                NotificationSender::new("Sarah Johnson")
                    .with_avatar("https://images.unsplash.com/photo-1494790108377-be9c29b29330"),
            ),
            false,
            now - Duration::minutes(5),
        ),
        Notification::restore(
            NotificationKind::Task,
            "Task Updated",
            "Your task \"Website Redesign\" was moved to Done",
            None,
            false,
            now - Duration::minutes(30),
        ),
        Notification::restore(
            NotificationKind::Document,
            "Document Shared",
            "Michael shared a document with you: \"Q2 Marketing Plan\"",
            Some(NotificationSender::new("Michael Thompson")),
            true,
            now - Duration::hours(2),
        ),
    ])
}
