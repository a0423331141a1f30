// Conversation Store
//
// 会话时间线的唯一写入方，其他组件只能通过它追加消息

use chrono::Utc;
use std::sync::Arc;

use super::ApplicationError;
use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::chat::domain::{ChatDomainEvent, Message, TimelineChangedEvent};
use crate::modules::chat::ports::{ConversationRepository, PaginatedResult, Pagination};
use crate::modules::directory::CounterpartId;

pub struct ConversationStore {
    repository: Arc<dyn ConversationRepository>,
    event_bus: Arc<EventBus>,
}

impl ConversationStore {
    pub fn new(repository: Arc<dyn ConversationRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    /// 获取完整时间线，会话尚不存在时为空
    pub async fn get_messages(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<Vec<Message>, ApplicationError> {
        Ok(self.repository.all_by_counterpart(counterpart_id).await?)
    }

    pub async fn get_page(
        &self,
        counterpart_id: &CounterpartId,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Message>, ApplicationError> {
        Ok(self
            .repository
            .find_by_counterpart(counterpart_id, pagination)
            .await?)
    }

    /// 追加到末尾并发布时间线变化事件，返回追加后的长度
    pub async fn append_message(
        &self,
        counterpart_id: &CounterpartId,
        message: Message,
    ) -> Result<usize, ApplicationError> {
        let length = self.repository.append(counterpart_id, &message).await?;

        tracing::debug!(
            "[ConversationStore] Appended {} to conversation {} (length: {})",
            message.id(),
            counterpart_id,
            length
        );

        self.event_bus
            .publish(AppEvent::Chat(ChatDomainEvent::TimelineChanged(
                TimelineChangedEvent {
                    counterpart_id: counterpart_id.clone(),
                    message_id: message.id(),
                    length,
                    timestamp: Utc::now(),
                },
            )));

        Ok(length)
    }

    pub async fn last_message(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<Option<Message>, ApplicationError> {
        Ok(self.repository.last_by_counterpart(counterpart_id).await?)
    }

    pub async fn message_count(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<usize, ApplicationError> {
        Ok(self.repository.count_by_counterpart(counterpart_id).await?)
    }

    pub async fn counterpart_ids(&self) -> Result<Vec<CounterpartId>, ApplicationError> {
        Ok(self.repository.counterpart_ids().await?)
    }
}
