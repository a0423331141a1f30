// Config Module
//
// 配置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含配置实体和值对象
// - ports: 端口层，定义配置读写的抽象接口
// - infrastructure: 基础设施层，实现具体的配置存储适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    AppConfig, GeneralConfig, LogLevel, LoggingConfig, NotificationConfig, PartialAppConfig,
    PartialGeneralConfig, PartialLoggingConfig, PartialNotificationConfig, PartialReplyConfig,
    ReplyConfig,
};

// Ports
pub use ports::{ConfigError, ConfigRepository};

// Infrastructure
pub use infrastructure::{InMemoryConfigRepository, JsonFileConfigRepository};

// Application
pub use application::{ConfigEntry, ConfigService};

use std::path::Path;
use std::sync::Arc;

/// Config 模块容器
///
/// 管理模块内的依赖注入
pub struct ConfigModule {
    service: ConfigService,
}

impl ConfigModule {
    /// 使用内存仓储创建（用于测试）
    pub fn new_in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryConfigRepository::new()))
    }

    /// 使用 JSON 文件存储创建
    pub fn new_with_file(data_dir: impl AsRef<Path>) -> Self {
        Self::with_repository(Arc::new(JsonFileConfigRepository::new(data_dir)))
    }

    /// 使用自定义仓储创建
    pub fn with_repository(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            service: ConfigService::new(repository),
        }
    }

    /// 获取配置服务
    pub fn service(&self) -> &ConfigService {
        &self.service
    }

    /// 获取全部配置
    pub async fn get_all(&self) -> Result<AppConfig, ConfigError> {
        self.service.get_all().await
    }

    /// 更新配置
    pub async fn update(&self, partial: PartialAppConfig) -> Result<AppConfig, ConfigError> {
        self.service.update(partial).await
    }

    /// 读取单个配置项
    pub async fn get_value(&self, key: &str) -> Result<Option<ConfigEntry>, ConfigError> {
        self.service.get_value(key).await
    }

    /// 覆盖单个配置项
    pub async fn set_value(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<AppConfig, ConfigError> {
        self.service.set_value(key, value).await
    }

    /// 重置配置
    pub async fn reset(&self) -> Result<AppConfig, ConfigError> {
        self.service.reset().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_module_integration() {
        let module = ConfigModule::new_in_memory();

        // 获取默认配置
        let config = module.get_all().await.unwrap();
        assert!(config.reply.enabled);

        // 更新配置
        let updated = module
            .update(PartialAppConfig {
                reply: Some(PartialReplyConfig {
                    enabled: Some(false),
                    min_delay_ms: Some(1_000),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!updated.reply.enabled);
        assert_eq!(updated.reply.min_delay_ms, 1_000);

        // 重置配置
        let reset = module.reset().await.unwrap();
        assert!(reset.reply.enabled);
        assert_eq!(reset.reply.min_delay_ms, 8_000);
    }

    #[tokio::test]
    async fn test_file_backed_module() {
        let dir = tempfile::tempdir().unwrap();
        let module = ConfigModule::new_with_file(dir.path());

        module
            .set_value("general.currentUserName", serde_json::json!("Alex"))
            .await
            .unwrap();

        let reopened = ConfigModule::new_with_file(dir.path());
        assert_eq!(
            reopened.get_all().await.unwrap().general.current_user_name,
            "Alex"
        );
    }
}
