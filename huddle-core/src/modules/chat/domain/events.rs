use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::MessageId;
use crate::modules::directory::CounterpartId;

/// 领域事件基础 trait
pub trait DomainEvent: Clone + Send + Sync {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// 会话时间线变化事件（界面据此滚动到最新消息）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineChangedEvent {
    pub counterpart_id: CounterpartId,
    pub message_id: MessageId,
    pub length: usize,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for TimelineChangedEvent {
    fn event_type(&self) -> &'static str {
        "timeline.changed"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 自动回复已排期
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyScheduledEvent {
    pub counterpart_id: CounterpartId,
    pub ticket_id: Uuid,
    pub delay_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ReplyScheduledEvent {
    fn event_type(&self) -> &'static str {
        "reply.scheduled"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 待发回复被取消（会话关闭）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyCancelledEvent {
    pub counterpart_id: CounterpartId,
    pub cancelled: usize,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ReplyCancelledEvent {
    fn event_type(&self) -> &'static str {
        "reply.cancelled"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 回复触发时联系人已不在花名册，静默丢弃
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDroppedEvent {
    pub counterpart_id: CounterpartId,
    pub ticket_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ReplyDroppedEvent {
    fn event_type(&self) -> &'static str {
        "reply.dropped"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 聊天领域事件枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChatDomainEvent {
    TimelineChanged(TimelineChangedEvent),
    ReplyScheduled(ReplyScheduledEvent),
    ReplyCancelled(ReplyCancelledEvent),
    ReplyDropped(ReplyDroppedEvent),
}

impl ChatDomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ChatDomainEvent::TimelineChanged(e) => e.event_type(),
            ChatDomainEvent::ReplyScheduled(e) => e.event_type(),
            ChatDomainEvent::ReplyCancelled(e) => e.event_type(),
            ChatDomainEvent::ReplyDropped(e) => e.event_type(),
        }
    }

    pub fn counterpart_id(&self) -> &CounterpartId {
        match self {
            ChatDomainEvent::TimelineChanged(e) => &e.counterpart_id,
            ChatDomainEvent::ReplyScheduled(e) => &e.counterpart_id,
            ChatDomainEvent::ReplyCancelled(e) => &e.counterpart_id,
            ChatDomainEvent::ReplyDropped(e) => &e.counterpart_id,
        }
    }
}
