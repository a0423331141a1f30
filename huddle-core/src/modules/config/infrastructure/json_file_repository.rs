// JSON File Config Repository
//
// 基于 JSON 文件的配置仓储实现，带内存缓存

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

pub const CONFIG_FILE_NAME: &str = "huddle.json";

pub struct JsonFileConfigRepository {
    /// 配置文件路径
    config_path: PathBuf,
    /// 内存缓存
    cache: RwLock<Option<AppConfig>>,
}

impl JsonFileConfigRepository {
    /// 在数据目录下使用默认文件名
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::at_path(data_dir.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn at_path(config_path: PathBuf) -> Self {
        Self {
            config_path,
            cache: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// 从文件加载配置
    async fn load_from_file(&self) -> Result<Option<AppConfig>, ConfigError> {
        if !tokio::fs::try_exists(&self.config_path)
            .await
            .map_err(|e| ConfigError::StorageError(e.to_string()))?
        {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| ConfigError::StorageError(e.to_string()))?;

        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(Some(config))
    }

    /// 保存配置到文件
    async fn save_to_file(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // 确保目录存在
        if let Some(parent) = self.config_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(config)?;

        tokio::fs::write(&self.config_path, content)
            .await
            .map_err(|e| ConfigError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ConfigRepository for JsonFileConfigRepository {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        // 先检查缓存
        {
            let cache = self.cache.read().await;
            if let Some(ref config) = *cache {
                return Ok(config.clone());
            }
        }

        let config = match self.load_from_file().await? {
            Some(config) => {
                tracing::info!("[Config] Loaded {}", self.config_path.display());
                config
            }
            None => {
                tracing::debug!(
                    "[Config] {} not found, using defaults",
                    self.config_path.display()
                );
                AppConfig::default()
            }
        };

        // 更新缓存
        *self.cache.write().await = Some(config.clone());

        Ok(config)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.save_to_file(config).await?;
        *self.cache.write().await = Some(config.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        match tokio::fs::remove_file(&self.config_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::StorageError(e.to_string())),
        }

        *self.cache.write().await = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        tokio::fs::try_exists(&self.config_path)
            .await
            .map_err(|e| ConfigError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileConfigRepository::new(dir.path());

        assert!(!repo.exists().await.unwrap());
        assert_eq!(repo.load().await.unwrap(), AppConfig::default());
    }

    #[tokio::test]
    async fn test_save_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.reply.probability = 0.8;

        JsonFileConfigRepository::new(dir.path())
            .save(&config)
            .await
            .unwrap();

        let reopened = JsonFileConfigRepository::new(dir.path());
        assert!(reopened.exists().await.unwrap());
        assert_eq!(reopened.load().await.unwrap().reply.probability, 0.8);
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileConfigRepository::new(dir.path().join("nested"));
        repo.save(&AppConfig::default()).await.unwrap();

        repo.clear().await.unwrap();
        assert!(!repo.exists().await.unwrap());
        // 再次清除不报错
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileConfigRepository::new(dir.path());
        tokio::fs::write(repo.path(), "{ not json").await.unwrap();

        assert!(matches!(
            repo.load().await,
            Err(ConfigError::SerializationError(_))
        ));
    }
}
