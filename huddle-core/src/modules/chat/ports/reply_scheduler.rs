use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::modules::chat::domain::MessageId;
use crate::modules::directory::CounterpartId;
use crate::modules::notification::NotificationId;

/// 一次已排期的自动回复
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyTicket {
    pub id: Uuid,
    pub counterpart_id: CounterpartId,
    pub delay_ms: u64,
    pub scheduled_at: DateTime<Utc>,
}

impl ReplyTicket {
    pub fn new(counterpart_id: CounterpartId, delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            counterpart_id,
            delay_ms: delay.as_millis() as u64,
            scheduled_at: Utc::now(),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// 回复触发后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// 已追加到会话并生成通知
    Delivered {
        message_id: MessageId,
        notification_id: NotificationId,
    },
    /// 联系人已不在花名册，静默丢弃
    CounterpartMissing,
    /// 触发前已被取消
    Cancelled,
    /// 写入失败，仅记录日志
    Failed(String),
}

impl ReplyOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ReplyOutcome::Delivered { .. })
    }
}

/// 回复投递端口
///
/// 计时器触发时由调度器调用
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn deliver(&self, ticket: &ReplyTicket) -> ReplyOutcome;
}

/// 回复调度端口
#[async_trait]
pub trait ReplyScheduler: Send + Sync {
    /// 为一次用户发送掷硬币，命中则排期一次回复
    async fn maybe_arm(&self, counterpart_id: &CounterpartId) -> Option<ReplyTicket>;

    /// 取消该会话所有待发回复，返回取消的数量
    async fn cancel_pending(&self, counterpart_id: &CounterpartId) -> usize;

    /// 该会话待发回复数量
    async fn pending_count(&self, counterpart_id: &CounterpartId) -> usize;

    /// 所有会话待发回复总数
    async fn total_pending(&self) -> usize;
}
