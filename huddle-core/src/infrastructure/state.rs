use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use super::EventBus;
use crate::modules::chat::{
    sample_conversations, ChatModule, InMemoryConversationRepository, ReplyPolicy,
};
use crate::modules::config::{AppConfig, ConfigModule, ReplyConfig};
use crate::modules::directory::InMemoryDirectory;
use crate::modules::notification::{
    seed_history, EventBusToastAdapter, NotificationCenter, NotificationFeed, ToastPort,
};
use crate::shared::AppResult;

/// 应用全局状态
///
/// 所有服务只构造一次，通过 Arc 在生产者与消费者之间共享
pub struct AppState {
    pub config: AppConfig,
    pub config_module: ConfigModule,
    pub event_bus: Arc<EventBus>,
    pub directory: Arc<InMemoryDirectory>,
    pub notifications: Arc<NotificationCenter>,
    pub chat: ChatModule,
}

impl AppState {
    /// 从配置模块加载配置并组装全部服务
    pub async fn bootstrap(config_module: ConfigModule) -> AppResult<Self> {
        let config = config_module.get_all().await?;
        let event_bus = Arc::new(EventBus::new());
        let toast: Arc<dyn ToastPort> = Arc::new(EventBusToastAdapter::new(event_bus.clone()));

        Ok(Self::assemble(
            config,
            config_module,
            event_bus,
            toast,
            StdRng::from_entropy(),
        ))
    }

    /// 默认配置 + 内存仓储
    pub async fn in_memory() -> AppResult<Self> {
        Self::bootstrap(ConfigModule::new_in_memory()).await
    }

    /// 显式注入 Toast 与随机源
    pub fn assemble(
        config: AppConfig,
        config_module: ConfigModule,
        event_bus: Arc<EventBus>,
        toast: Arc<dyn ToastPort>,
        rng: StdRng,
    ) -> Self {
        let directory = Arc::new(InMemoryDirectory::sample());

        let history = if config.notification.seed_history {
            seed_history()
        } else {
            NotificationFeed::new()
        };
        let notifications = Arc::new(
            NotificationCenter::in_memory(history, toast, event_bus.clone())
                .with_toast_duration_ms(config.notification.toast_duration_ms),
        );

        let repository = if config.general.seed_sample_data {
            InMemoryConversationRepository::with_conversations(sample_conversations())
        } else {
            InMemoryConversationRepository::new()
        };

        let chat = ChatModule::with_rng(
            Arc::new(repository),
            directory.clone(),
            notifications.clone(),
            event_bus.clone(),
            reply_policy(&config.reply),
            rng,
        );

        tracing::info!(
            "[AppState] Ready (sample data: {}, seeded notifications: {})",
            config.general.seed_sample_data,
            config.notification.seed_history
        );

        Self {
            config,
            config_module,
            event_bus,
            directory,
            notifications,
            chat,
        }
    }
}

/// 关闭自动回复时概率视为 0
pub fn reply_policy(config: &ReplyConfig) -> ReplyPolicy {
    let probability = if config.enabled {
        config.probability
    } else {
        0.0
    };

    ReplyPolicy::new(probability, config.min_delay_ms, config.max_delay_ms)
        .with_template(config.template.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::directory::CounterpartId;

    #[tokio::test]
    async fn test_bootstrap_seeds_state() {
        let state = AppState::in_memory().await.unwrap();

        assert_eq!(state.notifications.notifications().await.unwrap().len(), 3);
        assert_eq!(state.notifications.unread_count().await.unwrap(), 2);
        assert_eq!(
            state
                .chat
                .store()
                .message_count(&CounterpartId::from("1"))
                .await
                .unwrap(),
            5
        );
    }

    #[tokio::test]
    async fn test_seeding_can_be_disabled() {
        let mut config = AppConfig::default();
        config.general.seed_sample_data = false;
        config.notification.seed_history = false;
        let event_bus = Arc::new(EventBus::new());

        let state = AppState::assemble(
            config,
            ConfigModule::new_in_memory(),
            event_bus.clone(),
            Arc::new(EventBusToastAdapter::new(event_bus)),
            StdRng::seed_from_u64(1),
        );

        assert!(state.notifications.notifications().await.unwrap().is_empty());
        assert!(state.chat.store().counterpart_ids().await.unwrap().is_empty());
    }

    #[test]
    fn test_disabled_reply_policy_never_arms() {
        let config = ReplyConfig {
            enabled: false,
            ..ReplyConfig::default()
        };

        assert_eq!(reply_policy(&config).probability(), 0.0);
        assert_eq!(reply_policy(&ReplyConfig::default()).probability(), 0.5);
    }
}
