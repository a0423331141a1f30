// In-Memory Config Repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 内存配置仓储
///
/// 与文件仓储行为一致：保存前 `exists` 为 false，`load` 返回默认配置
#[derive(Default)]
pub struct InMemoryConfigRepository {
    saved: RwLock<Option<AppConfig>>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        Ok(self.saved.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        *self.saved.write().await = Some(config.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        self.saved.write().await.take();
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(self.saved.read().await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsaved_repository_reads_defaults() {
        let repo = InMemoryConfigRepository::new();

        assert!(!repo.exists().await.unwrap());
        assert_eq!(repo.load().await.unwrap(), AppConfig::default());
        assert_eq!(
            repo.get_value("notification.toastDurationMs").await.unwrap(),
            Some(serde_json::json!(5000))
        );
    }

    #[tokio::test]
    async fn test_clear_forgets_saved_config() {
        let repo = InMemoryConfigRepository::new();
        let mut config = AppConfig::default();
        config.general.seed_sample_data = false;
        repo.save(&config).await.unwrap();
        assert!(repo.exists().await.unwrap());
        assert!(!repo.load().await.unwrap().general.seed_sample_data);

        repo.clear().await.unwrap();

        assert!(!repo.exists().await.unwrap());
        assert!(repo.load().await.unwrap().general.seed_sample_data);
    }
}
