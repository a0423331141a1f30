use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use super::super::{ApplicationError, ConversationStore, QueryHandler};
use crate::modules::directory::{Counterpart, CounterpartDirectory};

/// 会话列表查询（联系人侧栏）
#[derive(Debug, Clone, Default)]
pub struct ListConversationsQuery;

/// 单个联系人的会话摘要
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub counterpart: Counterpart,
    pub last_message_preview: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub last_message_from_current_user: bool,
    pub message_count: usize,
}

/// 会话列表处理器，按花名册顺序返回
pub struct ListConversationsHandler {
    store: Arc<ConversationStore>,
    directory: Arc<dyn CounterpartDirectory>,
}

impl ListConversationsHandler {
    pub fn new(store: Arc<ConversationStore>, directory: Arc<dyn CounterpartDirectory>) -> Self {
        Self { store, directory }
    }
}

#[async_trait]
impl QueryHandler<ListConversationsQuery, Vec<ConversationSummary>> for ListConversationsHandler {
    async fn handle(
        &self,
        _query: ListConversationsQuery,
    ) -> Result<Vec<ConversationSummary>, ApplicationError> {
        let roster = self.directory.list().await?;
        let mut summaries = Vec::with_capacity(roster.len());

        for counterpart in roster {
            let last = self.store.last_message(counterpart.id()).await?;
            let message_count = self.store.message_count(counterpart.id()).await?;

            summaries.push(ConversationSummary {
                last_message_preview: last.as_ref().map(|m| m.preview()),
                last_message_at: last.as_ref().map(|m| m.created_at()),
                last_message_from_current_user: last
                    .as_ref()
                    .is_some_and(|m| m.is_from_current_user()),
                message_count,
                counterpart,
            });
        }

        Ok(summaries)
    }
}
