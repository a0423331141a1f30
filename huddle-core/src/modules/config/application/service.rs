// Config Service
//
// 配置服务门面，提供统一的 API

use std::sync::Arc;

use super::{
    CommandHandler, ConfigEntry, GetAllConfigHandler, GetAllConfigQuery, GetConfigValueHandler,
    GetConfigValueQuery, QueryHandler, ResetConfigCommand, ResetConfigHandler,
    SetConfigValueCommand, SetConfigValueHandler, UpdateConfigCommand, UpdateConfigHandler,
};
use crate::modules::config::domain::{AppConfig, PartialAppConfig};
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 配置服务实现
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
    // Handlers
    get_all_handler: GetAllConfigHandler,
    get_value_handler: GetConfigValueHandler,
    update_handler: UpdateConfigHandler,
    reset_handler: ResetConfigHandler,
    set_value_handler: SetConfigValueHandler,
}

impl ConfigService {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            get_all_handler: GetAllConfigHandler::new(repository.clone()),
            get_value_handler: GetConfigValueHandler::new(repository.clone()),
            update_handler: UpdateConfigHandler::new(repository.clone()),
            reset_handler: ResetConfigHandler::new(repository.clone()),
            set_value_handler: SetConfigValueHandler::new(repository.clone()),
            repository,
        }
    }

    /// 获取仓储引用
    pub fn repository(&self) -> &Arc<dyn ConfigRepository> {
        &self.repository
    }

    pub async fn get_all(&self) -> Result<AppConfig, ConfigError> {
        self.get_all_handler.handle(GetAllConfigQuery).await
    }

    /// 按点分隔路径读取单个配置项
    pub async fn get_value(&self, key: &str) -> Result<Option<ConfigEntry>, ConfigError> {
        self.get_value_handler
            .handle(GetConfigValueQuery::new(key))
            .await
    }

    /// 覆盖单个已有配置项，校验失败时不写入
    pub async fn set_value(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<AppConfig, ConfigError> {
        let config = self
            .set_value_handler
            .handle(SetConfigValueCommand::new(key, value))
            .await?;
        tracing::info!("[Config] Set {}", key);
        Ok(config)
    }

    pub async fn update(&self, partial: PartialAppConfig) -> Result<AppConfig, ConfigError> {
        let config = self
            .update_handler
            .handle(UpdateConfigCommand::new(partial))
            .await?;
        tracing::info!("[Config] Configuration updated");
        Ok(config)
    }

    pub async fn reset(&self) -> Result<AppConfig, ConfigError> {
        let config = self.reset_handler.handle(ResetConfigCommand).await?;
        tracing::info!("[Config] Configuration reset to defaults");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::domain::{LogLevel, PartialLoggingConfig};
    use crate::modules::config::infrastructure::InMemoryConfigRepository;

    #[tokio::test]
    async fn test_config_service() {
        let repo = Arc::new(InMemoryConfigRepository::new());
        let service = ConfigService::new(repo);

        // 获取全部配置
        let config = service.get_all().await.unwrap();
        assert_eq!(config.logging.level, LogLevel::Info);

        // 更新配置
        let updated = service
            .update(PartialAppConfig {
                logging: Some(PartialLoggingConfig {
                    level: Some(LogLevel::Debug),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.logging.level, LogLevel::Debug);

        // 重置配置
        let reset = service.reset().await.unwrap();
        assert_eq!(reset.logging.level, LogLevel::Info);
    }

    #[tokio::test]
    async fn test_config_service_get_set() {
        let service = ConfigService::new(Arc::new(InMemoryConfigRepository::new()));

        service
            .set_value("reply.maxDelayMs", serde_json::json!(20_000))
            .await
            .unwrap();

        let entry = service.get_value("reply.maxDelayMs").await.unwrap().unwrap();
        assert_eq!(entry.value, serde_json::json!(20_000));
        assert!(service.get_value("reply.missing").await.unwrap().is_none());

        let rejected = service
            .set_value("reply.minDelayMs", serde_json::json!(30_000))
            .await;
        assert!(matches!(rejected, Err(ConfigError::ValidationError { .. })));
        assert_eq!(service.get_all().await.unwrap().reply.min_delay_ms, 8_000);
    }
}
