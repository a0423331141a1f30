use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler, ConversationStore};
use crate::modules::chat::domain::{Message, ReplyPolicy};
use crate::modules::chat::ports::{ReplyOutcome, ReplySink, ReplyTicket};
use crate::modules::directory::{CounterpartDirectory, CounterpartId};
use crate::modules::notification::{NotificationCenter, NotificationKind, NotificationSender};

/// 回复通知标题
pub const REPLY_NOTIFICATION_TITLE: &str = "New Message";

/// 投递自动回复命令
#[derive(Debug, Clone)]
pub struct DeliverReplyCommand {
    pub counterpart_id: CounterpartId,
}

impl DeliverReplyCommand {
    pub fn new(counterpart_id: impl Into<CounterpartId>) -> Self {
        Self {
            counterpart_id: counterpart_id.into(),
        }
    }
}

impl From<&ReplyTicket> for DeliverReplyCommand {
    fn from(ticket: &ReplyTicket) -> Self {
        Self::new(ticket.counterpart_id.clone())
    }
}

/// 投递自动回复处理器
///
/// 一次触发同时写入会话时间线和全局通知流
pub struct DeliverReplyHandler {
    store: Arc<ConversationStore>,
    directory: Arc<dyn CounterpartDirectory>,
    notifications: Arc<NotificationCenter>,
    policy: ReplyPolicy,
}

impl DeliverReplyHandler {
    pub fn new(
        store: Arc<ConversationStore>,
        directory: Arc<dyn CounterpartDirectory>,
        notifications: Arc<NotificationCenter>,
        policy: ReplyPolicy,
    ) -> Self {
        Self {
            store,
            directory,
            notifications,
            policy,
        }
    }
}

#[async_trait]
impl CommandHandler<DeliverReplyCommand, ReplyOutcome> for DeliverReplyHandler {
    async fn handle(&self, command: DeliverReplyCommand) -> Result<ReplyOutcome, ApplicationError> {
        let Some(counterpart) = self.directory.get(&command.counterpart_id).await? else {
            tracing::debug!(
                "[ReplySimulator] {} left the directory, dropping reply",
                command.counterpart_id
            );
            return Ok(ReplyOutcome::CounterpartMissing);
        };

        let reply = Message::new_incoming(counterpart.id(), self.policy.reply_text(counterpart.name()));
        let message_id = reply.id();
        self.store.append_message(counterpart.id(), reply).await?;

        let sender = NotificationSender::new(counterpart.name())
            .with_avatar(counterpart.avatar_ref());
        let notification = self
            .notifications
            .add_notification(
                NotificationKind::Message,
                REPLY_NOTIFICATION_TITLE,
                self.policy.notification_body(counterpart.name()),
                Some(sender),
            )
            .await?;

        tracing::info!(
            "[ReplySimulator] Delivered reply {} from {}",
            message_id,
            counterpart.name()
        );

        Ok(ReplyOutcome::Delivered {
            message_id,
            notification_id: notification.id(),
        })
    }
}

#[async_trait]
impl ReplySink for DeliverReplyHandler {
    async fn deliver(&self, ticket: &ReplyTicket) -> ReplyOutcome {
        match self.handle(DeliverReplyCommand::from(ticket)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("[ReplySimulator] Reply {} failed: {}", ticket.id, e);
                ReplyOutcome::Failed(e.to_string())
            }
        }
    }
}
