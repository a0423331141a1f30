use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::chat::{Attachment, Message};
use crate::modules::directory::{Counterpart, Presence};
use crate::modules::notification::{Notification, NotificationFeed};

/// 前端展示用的发送者信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderView {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub is_current_user: bool,
}

impl SenderView {
    /// 花名册中找不到的发送者
    pub fn unknown(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "Unknown".to_string(),
            avatar: String::new(),
            is_current_user: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub sender: SenderView,
    pub attachments: Vec<Attachment>,
}

impl MessageView {
    pub fn new(message: &Message, sender: SenderView) -> Self {
        Self {
            id: message.id().into(),
            content: message.content().to_string(),
            timestamp: message.created_at(),
            sender,
            attachments: message.attachments().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartView {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub status: Presence,
}

impl From<&Counterpart> for CounterpartView {
    fn from(counterpart: &Counterpart) -> Self {
        Self {
            id: counterpart.id().to_string(),
            name: counterpart.name().to_string(),
            avatar: counterpart.avatar_ref().to_string(),
            status: counterpart.presence(),
        }
    }
}

/// 通知面板快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeedView {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl From<NotificationFeed> for NotificationFeedView {
    fn from(feed: NotificationFeed) -> Self {
        Self {
            unread_count: feed.unread_count(),
            notifications: feed.entries().to_vec(),
        }
    }
}
