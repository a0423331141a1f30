// Chat Module - 聊天模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含实体、值对象、回复策略和领域事件
// - ports: 端口层，定义会话仓储与回复调度的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    // Traits
    ApplicationError,
    // Commands
    CloseConversationCommand,
    CloseConversationHandler,
    CloseConversationResponse,
    CommandHandler,
    ConversationStore,
    // Queries
    ConversationSummary,
    DeliverReplyCommand,
    DeliverReplyHandler,
    GetMessagesQuery,
    ListConversationsHandler,
    ListConversationsQuery,
    ListMessagesHandler,
    ListMessagesQuery,
    QueryHandler,
    SendMessageCommand,
    SendMessageHandler,
    SendMessageResponse,
};

pub use domain::{
    format_size_label, is_sendable, Attachment, AttachmentId, AttachmentKind, ChatDomainEvent,
    Draft, Message, MessageId, ReplyCancelledEvent, ReplyDroppedEvent, ReplyPolicy,
    ReplyScheduledEvent, SenderId, TimelineChangedEvent, CURRENT_USER_ID,
};

pub use infrastructure::{
    sample_conversations, AttachmentRegistry, InMemoryConversationRepository, SelectedFile,
    TokioReplyScheduler,
};

pub use ports::{
    ConversationRepository, PaginatedResult, Pagination, ReplyOutcome, ReplyScheduler, ReplySink,
    ReplyTicket, RepositoryError,
};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::infrastructure::EventBus;
use crate::modules::directory::{CounterpartDirectory, CounterpartId};
use crate::modules::notification::NotificationCenter;

/// Chat 模块容器
///
/// 管理模块内的依赖注入
pub struct ChatModule {
    store: Arc<ConversationStore>,
    attachments: Arc<AttachmentRegistry>,
    scheduler: Arc<dyn ReplyScheduler>,
    // Handlers
    send_message_handler: SendMessageHandler,
    close_conversation_handler: CloseConversationHandler,
    deliver_reply_handler: Arc<DeliverReplyHandler>,
    list_messages_handler: ListMessagesHandler,
    list_conversations_handler: ListConversationsHandler,
}

impl ChatModule {
    /// 创建新的 ChatModule 实例（内存存储，随机源取自系统熵）
    pub fn new(
        directory: Arc<dyn CounterpartDirectory>,
        notifications: Arc<NotificationCenter>,
        event_bus: Arc<EventBus>,
        policy: ReplyPolicy,
    ) -> Self {
        Self::with_rng(
            Arc::new(InMemoryConversationRepository::new()),
            directory,
            notifications,
            event_bus,
            policy,
            StdRng::from_entropy(),
        )
    }

    /// 使用自定义仓储和随机源创建 ChatModule
    ///
    /// # Arguments
    /// * `repository` - 会话仓储（可预置示例会话）
    /// * `rng` - 回复掷硬币使用的随机源，测试时传入固定种子
    pub fn with_rng(
        repository: Arc<dyn ConversationRepository>,
        directory: Arc<dyn CounterpartDirectory>,
        notifications: Arc<NotificationCenter>,
        event_bus: Arc<EventBus>,
        policy: ReplyPolicy,
        rng: StdRng,
    ) -> Self {
        let store = Arc::new(ConversationStore::new(repository, event_bus.clone()));

        let deliver_reply_handler = Arc::new(DeliverReplyHandler::new(
            store.clone(),
            directory.clone(),
            notifications,
            policy.clone(),
        ));
        let scheduler: Arc<dyn ReplyScheduler> = Arc::new(TokioReplyScheduler::with_rng(
            policy,
            rng,
            deliver_reply_handler.clone(),
            event_bus,
        ));

        Self {
            send_message_handler: SendMessageHandler::new(store.clone(), scheduler.clone()),
            close_conversation_handler: CloseConversationHandler::new(scheduler.clone()),
            list_messages_handler: ListMessagesHandler::new(store.clone()),
            list_conversations_handler: ListConversationsHandler::new(store.clone(), directory),
            deliver_reply_handler,
            attachments: Arc::new(AttachmentRegistry::new()),
            scheduler,
            store,
        }
    }

    // Command handlers

    /// 发送消息，并按概率排期一次自动回复
    pub async fn send_message(
        &self,
        command: SendMessageCommand,
    ) -> Result<SendMessageResponse, ApplicationError> {
        self.send_message_handler.handle(command).await
    }

    /// 关闭会话，取消其待发回复
    pub async fn close_conversation(
        &self,
        command: CloseConversationCommand,
    ) -> Result<CloseConversationResponse, ApplicationError> {
        self.close_conversation_handler.handle(command).await
    }

    /// 立即投递一条自动回复（绕过计时器）
    pub async fn deliver_reply(
        &self,
        command: DeliverReplyCommand,
    ) -> Result<ReplyOutcome, ApplicationError> {
        self.deliver_reply_handler.handle(command).await
    }

    /// 登记一次选择的附件
    pub async fn register_attachments(
        &self,
        kind: AttachmentKind,
        files: Vec<SelectedFile>,
    ) -> Vec<Attachment> {
        self.attachments.register(kind, files).await
    }

    // Query handlers

    /// 获取完整时间线
    pub async fn get_messages(
        &self,
        query: GetMessagesQuery,
    ) -> Result<Vec<Message>, ApplicationError> {
        self.list_messages_handler.handle(query).await
    }

    /// 分页列出时间线
    pub async fn list_messages(
        &self,
        query: ListMessagesQuery,
    ) -> Result<PaginatedResult<Message>, ApplicationError> {
        self.list_messages_handler.handle(query).await
    }

    /// 联系人侧栏的会话摘要
    pub async fn list_conversations(
        &self,
        query: ListConversationsQuery,
    ) -> Result<Vec<ConversationSummary>, ApplicationError> {
        self.list_conversations_handler.handle(query).await
    }

    pub async fn pending_replies(&self, counterpart_id: &CounterpartId) -> usize {
        self.scheduler.pending_count(counterpart_id).await
    }

    // Accessors

    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    pub fn attachments(&self) -> &Arc<AttachmentRegistry> {
        &self.attachments
    }

    pub fn scheduler(&self) -> &Arc<dyn ReplyScheduler> {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::directory::InMemoryDirectory;
    use crate::modules::notification::{NotificationFeed, NotificationKind, TracingToastAdapter};
    use std::time::Duration;

    struct Fixture {
        module: ChatModule,
        directory: Arc<InMemoryDirectory>,
        notifications: Arc<NotificationCenter>,
    }

    fn fixture(probability: f64) -> Fixture {
        let event_bus = Arc::new(EventBus::new());
        let directory = Arc::new(InMemoryDirectory::sample());
        let notifications = Arc::new(NotificationCenter::in_memory(
            NotificationFeed::new(),
            Arc::new(TracingToastAdapter),
            event_bus.clone(),
        ));
        let module = ChatModule::with_rng(
            Arc::new(InMemoryConversationRepository::new()),
            directory.clone(),
            notifications.clone(),
            event_bus,
            ReplyPolicy::new(probability, 8_000, 13_000),
            StdRng::seed_from_u64(7),
        );
        Fixture {
            module,
            directory,
            notifications,
        }
    }

    async fn timeline(module: &ChatModule, id: &str) -> Vec<Message> {
        module.get_messages(GetMessagesQuery::new(id)).await.unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_then_reply_round_trip() {
        let f = fixture(1.0);

        let response = f
            .module
            .send_message(SendMessageCommand::new("1", "hello", Vec::new()))
            .await
            .unwrap();
        assert!(response.reply.is_some());

        // 发送时不产生通知
        let sent = timeline(&f.module, "1").await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].content(), "hello");
        assert_eq!(sent[0].sender_id().as_str(), "current");
        assert!(f.notifications.notifications().await.unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(7_999)).await;
        assert_eq!(timeline(&f.module, "1").await.len(), 1);

        tokio::time::sleep(Duration::from_millis(5_002)).await;
        let messages = timeline(&f.module, "1").await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id(), response.message.id());
        assert_eq!(messages[1].sender_id().as_str(), "1");

        let feed = f.notifications.notifications().await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].kind(), NotificationKind::Message);
        assert_eq!(f.notifications.unread_count().await.unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_send_arms_nothing() {
        let f = fixture(1.0);

        let result = f
            .module
            .send_message(SendMessageCommand::new("1", "  ", Vec::new()))
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidSend)));

        tokio::time::sleep(Duration::from_millis(13_001)).await;
        assert!(timeline(&f.module, "1").await.is_empty());
        assert!(f.notifications.notifications().await.unwrap().is_empty());
        assert_eq!(f.module.scheduler().total_pending().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_conversation_cancels_replies() {
        let f = fixture(1.0);
        for text in ["one", "two"] {
            f.module
                .send_message(SendMessageCommand::new("2", text, Vec::new()))
                .await
                .unwrap();
        }
        assert_eq!(f.module.pending_replies(&CounterpartId::from("2")).await, 2);

        let closed = f
            .module
            .close_conversation(CloseConversationCommand::new("2"))
            .await
            .unwrap();
        assert_eq!(closed.cancelled_replies, 2);

        tokio::time::sleep(Duration::from_millis(13_001)).await;
        assert_eq!(timeline(&f.module, "2").await.len(), 2);
        assert!(f.notifications.notifications().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_dropped_when_counterpart_leaves() {
        let f = fixture(1.0);
        f.module
            .send_message(SendMessageCommand::new("3", "are you there?", Vec::new()))
            .await
            .unwrap();

        f.directory.remove(&CounterpartId::from("3")).await;
        tokio::time::sleep(Duration::from_millis(13_001)).await;

        assert_eq!(timeline(&f.module, "3").await.len(), 1);
        assert!(f.notifications.notifications().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_across_conversations_stay_separate() {
        let f = fixture(1.0);
        for id in ["1", "2", "4"] {
            f.module
                .send_message(SendMessageCommand::new(id, "ping", Vec::new()))
                .await
                .unwrap();
        }

        tokio::time::sleep(Duration::from_millis(13_001)).await;

        for id in ["1", "2", "4"] {
            let messages = timeline(&f.module, id).await;
            assert_eq!(messages.len(), 2);
            assert!(messages[0].is_from_current_user());
            assert_eq!(messages[1].sender_id().as_str(), id);
        }
        assert_eq!(f.notifications.unread_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_attachments_flow_into_message() {
        let f = fixture(0.0);
        let attachments = f
            .module
            .register_attachments(
                AttachmentKind::File,
                vec![SelectedFile::new("brief.pdf", vec![0u8; 2048])],
            )
            .await;

        let mut draft = Draft::new();
        draft.add_attachments(attachments);
        let response = f
            .module
            .send_message(SendMessageCommand::from_draft("5", &mut draft).unwrap())
            .await
            .unwrap();

        let attachment = &response.message.attachments()[0];
        assert_eq!(attachment.size_label(), Some("2.0 KB"));
        assert!(f
            .module
            .attachments()
            .resolve(attachment.resource_ref())
            .await
            .is_some());
        assert!(response.reply.is_none());
    }
}
