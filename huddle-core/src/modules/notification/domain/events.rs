use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{NotificationId, NotificationKind};

/// 通知领域事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NotificationDomainEvent {
    /// 新通知已加入通知流
    Added {
        notification_id: NotificationId,
        kind: NotificationKind,
        unread_count: usize,
        timestamp: DateTime<Utc>,
    },
    /// 已读状态或条目数量发生变化
    FeedChanged {
        unread_count: usize,
        total: usize,
        timestamp: DateTime<Utc>,
    },
}

impl NotificationDomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            NotificationDomainEvent::Added { .. } => "notification.added",
            NotificationDomainEvent::FeedChanged { .. } => "notification.feed_changed",
        }
    }

    pub fn unread_count(&self) -> usize {
        match self {
            NotificationDomainEvent::Added { unread_count, .. }
            | NotificationDomainEvent::FeedChanged { unread_count, .. } => *unread_count,
        }
    }
}
