// Notification Domain Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{MarkReadOutcome, NotificationId, NotificationKind, NotificationSender};

/// 通知实体
///
/// 除已读状态外创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    title: String,
    body: String,
    read: bool,
    timestamp: DateTime<Utc>,
    sender: Option<NotificationSender>,
}

impl Notification {
    /// 创建未读通知，时间戳为当前时间
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        sender: Option<NotificationSender>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            body: body.into(),
            read: false,
            timestamp: Utc::now(),
            sender,
        }
    }

    /// 从历史数据恢复
    pub fn restore(
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        sender: Option<NotificationSender>,
        read: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            body: body.into(),
            read,
            timestamp,
            sender,
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn sender(&self) -> Option<&NotificationSender> {
        self.sender.as_ref()
    }

    pub(crate) fn mark_read(&mut self) -> MarkReadOutcome {
        if self.read {
            MarkReadOutcome::AlreadyRead
        } else {
            self.read = true;
            MarkReadOutcome::Marked
        }
    }
}
