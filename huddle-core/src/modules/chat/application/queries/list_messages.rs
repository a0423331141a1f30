use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, ConversationStore, QueryHandler};
use crate::modules::chat::domain::Message;
use crate::modules::chat::ports::{PaginatedResult, Pagination};
use crate::modules::directory::CounterpartId;

/// 获取完整时间线查询
#[derive(Debug, Clone)]
pub struct GetMessagesQuery {
    pub counterpart_id: CounterpartId,
}

impl GetMessagesQuery {
    pub fn new(counterpart_id: impl Into<CounterpartId>) -> Self {
        Self {
            counterpart_id: counterpart_id.into(),
        }
    }
}

/// 分页获取时间线查询
#[derive(Debug, Clone)]
pub struct ListMessagesQuery {
    pub counterpart_id: CounterpartId,
    pub pagination: Pagination,
}

impl ListMessagesQuery {
    pub fn new(counterpart_id: impl Into<CounterpartId>, pagination: Pagination) -> Self {
        Self {
            counterpart_id: counterpart_id.into(),
            pagination,
        }
    }
}

/// 消息查询处理器
pub struct ListMessagesHandler {
    store: Arc<ConversationStore>,
}

impl ListMessagesHandler {
    pub fn new(store: Arc<ConversationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<GetMessagesQuery, Vec<Message>> for ListMessagesHandler {
    async fn handle(&self, query: GetMessagesQuery) -> Result<Vec<Message>, ApplicationError> {
        self.store.get_messages(&query.counterpart_id).await
    }
}

#[async_trait]
impl QueryHandler<ListMessagesQuery, PaginatedResult<Message>> for ListMessagesHandler {
    async fn handle(
        &self,
        query: ListMessagesQuery,
    ) -> Result<PaginatedResult<Message>, ApplicationError> {
        self.store
            .get_page(&query.counterpart_id, query.pagination)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::EventBus;
    use crate::modules::chat::infrastructure::InMemoryConversationRepository;

    #[tokio::test]
    async fn test_paged_listing() {
        let store = Arc::new(ConversationStore::new(
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(EventBus::new()),
        ));
        let counterpart = CounterpartId::from("1");
        for i in 0..5 {
            store
                .append_message(&counterpart, Message::new_outgoing(format!("m{}", i), Vec::new()))
                .await
                .unwrap();
        }
        let handler = ListMessagesHandler::new(store);

        let page: PaginatedResult<Message> = handler
            .handle(ListMessagesQuery::new("1", Pagination::new(2, 2)))
            .await
            .unwrap();
        let contents: Vec<&str> = page.items.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["m2", "m3"]);
        assert_eq!(page.total, 5);
        assert!(page.has_next());

        let all: Vec<Message> = handler.handle(GetMessagesQuery::new("1")).await.unwrap();
        assert_eq!(all.len(), 5);
    }
}
