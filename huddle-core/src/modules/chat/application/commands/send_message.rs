use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler, ConversationStore};
use crate::modules::chat::domain::{is_sendable, Attachment, Draft, Message};
use crate::modules::chat::ports::{ReplyScheduler, ReplyTicket};
use crate::modules::directory::CounterpartId;

/// 发送消息命令
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// 目标联系人
    pub counterpart_id: CounterpartId,
    /// 消息正文（原样保存，不做裁剪）
    pub content: String,
    /// 附件，按选择顺序
    pub attachments: Vec<Attachment>,
}

impl SendMessageCommand {
    pub fn new(
        counterpart_id: impl Into<CounterpartId>,
        content: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            counterpart_id: counterpart_id.into(),
            content: content.into(),
            attachments,
        }
    }

    /// 取出草稿内容并清空草稿；草稿不可发送时返回 None，草稿保持原样
    pub fn from_draft(counterpart_id: impl Into<CounterpartId>, draft: &mut Draft) -> Option<Self> {
        if !draft.is_sendable() {
            return None;
        }
        let (content, attachments) = draft.take();
        Some(Self::new(counterpart_id, content, attachments))
    }
}

/// 发送消息响应
#[derive(Debug, Clone)]
pub struct SendMessageResponse {
    /// 已追加的用户消息
    pub message: Message,
    /// 本次发送触发的自动回复（未命中时为 None）
    pub reply: Option<ReplyTicket>,
}

/// 发送消息命令处理器
///
/// 先追加消息，再决定是否排期回复，保证回复一定排在触发它的消息之后
pub struct SendMessageHandler {
    store: Arc<ConversationStore>,
    scheduler: Arc<dyn ReplyScheduler>,
}

impl SendMessageHandler {
    pub fn new(store: Arc<ConversationStore>, scheduler: Arc<dyn ReplyScheduler>) -> Self {
        Self { store, scheduler }
    }
}

#[async_trait]
impl CommandHandler<SendMessageCommand, SendMessageResponse> for SendMessageHandler {
    async fn handle(
        &self,
        command: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        if !is_sendable(&command.content, &command.attachments) {
            tracing::debug!(
                "[SendMessage] Refused empty send to {}",
                command.counterpart_id
            );
            return Err(ApplicationError::InvalidSend);
        }

        let message = Message::new_outgoing(command.content, command.attachments);
        self.store
            .append_message(&command.counterpart_id, message.clone())
            .await?;

        let reply = self.scheduler.maybe_arm(&command.counterpart_id).await;

        tracing::info!(
            "[SendMessage] Sent {} to {} (reply armed: {})",
            message.id(),
            command.counterpart_id,
            reply.is_some()
        );

        Ok(SendMessageResponse { message, reply })
    }
}
