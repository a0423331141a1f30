// Notification Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 通知唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for NotificationId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<NotificationId> for Uuid {
    fn from(id: NotificationId) -> Self {
        id.0
    }
}

/// 通知来源类型
///
/// 穷尽枚举：新增来源时所有消费方都必须处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// 聊天消息
    Message,
    /// 看板任务
    Task,
    /// 文档共享
    Document,
    /// 系统通知
    System,
}

impl NotificationKind {
    pub fn all() -> &'static [NotificationKind] {
        &[
            NotificationKind::Message,
            NotificationKind::Task,
            NotificationKind::Document,
            NotificationKind::System,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Message => "message",
            NotificationKind::Task => "task",
            NotificationKind::Document => "document",
            NotificationKind::System => "system",
        }
    }

    /// 通知面板使用的图标名
    pub fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Message => "mail-plus",
            NotificationKind::Task => "trello",
            NotificationKind::Document => "file-text",
            NotificationKind::System => "bell",
        }
    }
}

/// 通知发送方
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSender {
    pub name: String,
    pub avatar_ref: Option<String>,
}

impl NotificationSender {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_ref: None,
        }
    }

    pub fn with_avatar(mut self, avatar_ref: impl Into<String>) -> Self {
        self.avatar_ref = Some(avatar_ref.into());
        self
    }
}

/// 标记已读的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkReadOutcome {
    /// 状态由未读变为已读
    Marked,
    /// 已经是已读，未改变
    AlreadyRead,
    /// ID 不存在，未改变
    NotFound,
}

impl MarkReadOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, MarkReadOutcome::Marked)
    }
}
