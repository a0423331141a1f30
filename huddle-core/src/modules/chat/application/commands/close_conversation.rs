use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::chat::ports::ReplyScheduler;
use crate::modules::directory::CounterpartId;

/// 关闭会话命令（切走或关闭聊天窗口）
#[derive(Debug, Clone)]
pub struct CloseConversationCommand {
    pub counterpart_id: CounterpartId,
}

impl CloseConversationCommand {
    pub fn new(counterpart_id: impl Into<CounterpartId>) -> Self {
        Self {
            counterpart_id: counterpart_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseConversationResponse {
    pub cancelled_replies: usize,
}

/// 关闭会话处理器：取消该会话所有尚未触发的回复，时间线保持不变
pub struct CloseConversationHandler {
    scheduler: Arc<dyn ReplyScheduler>,
}

impl CloseConversationHandler {
    pub fn new(scheduler: Arc<dyn ReplyScheduler>) -> Self {
        Self { scheduler }
    }
}

#[async_trait]
impl CommandHandler<CloseConversationCommand, CloseConversationResponse>
    for CloseConversationHandler
{
    async fn handle(
        &self,
        command: CloseConversationCommand,
    ) -> Result<CloseConversationResponse, ApplicationError> {
        let cancelled_replies = self.scheduler.cancel_pending(&command.counterpart_id).await;

        tracing::info!(
            "[CloseConversation] Closed {} ({} pending replies cancelled)",
            command.counterpart_id,
            cancelled_replies
        );

        Ok(CloseConversationResponse { cancelled_replies })
    }
}
