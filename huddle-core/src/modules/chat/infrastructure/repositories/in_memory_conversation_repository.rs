use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::chat::domain::Message;
use crate::modules::chat::ports::{
    ConversationRepository, PaginatedResult, Pagination, RepositoryError,
};
use crate::modules::directory::CounterpartId;

/// 内存会话仓储
///
/// 进程内有效，重启后不保留
pub struct InMemoryConversationRepository {
    /// 消息存储（按联系人分组）
    conversations: RwLock<BTreeMap<CounterpartId, Vec<Message>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self {
            conversations: RwLock::new(BTreeMap::new()),
        }
    }

    /// 以预置时间线初始化
    pub fn with_conversations(
        conversations: impl IntoIterator<Item = (CounterpartId, Vec<Message>)>,
    ) -> Self {
        Self {
            conversations: RwLock::new(conversations.into_iter().collect()),
        }
    }
}

impl Default for InMemoryConversationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn append(
        &self,
        counterpart_id: &CounterpartId,
        message: &Message,
    ) -> Result<usize, RepositoryError> {
        let mut conversations = self.conversations.write().await;
        let timeline = conversations.entry(counterpart_id.clone()).or_default();

        if timeline.iter().any(|m| m.id() == message.id()) {
            return Err(RepositoryError::Conflict(format!(
                "message {} already in conversation {}",
                message.id(),
                counterpart_id
            )));
        }

        timeline.push(message.clone());
        Ok(timeline.len())
    }

    async fn all_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.get(counterpart_id).cloned().unwrap_or_default())
    }

    async fn find_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Message>, RepositoryError> {
        let conversations = self.conversations.read().await;
        let timeline = conversations
            .get(counterpart_id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let total = timeline.len();
        let offset = pagination.offset();
        let limit = pagination.limit as usize;

        let items = if offset < total {
            timeline[offset..total.min(offset.saturating_add(limit))].to_vec()
        } else {
            Vec::new()
        };

        Ok(PaginatedResult::new(items, total, pagination))
    }

    async fn last_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<Option<Message>, RepositoryError> {
        let conversations = self.conversations.read().await;

        Ok(conversations
            .get(counterpart_id)
            .and_then(|msgs| msgs.last().cloned()))
    }

    async fn count_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<usize, RepositoryError> {
        let conversations = self.conversations.read().await;

        Ok(conversations
            .get(counterpart_id)
            .map(|msgs| msgs.len())
            .unwrap_or(0))
    }

    async fn counterpart_ids(&self) -> Result<Vec<CounterpartId>, RepositoryError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.keys().cloned().collect())
    }
}
