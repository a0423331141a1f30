// Config Queries

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 查询处理器 trait
#[async_trait]
pub trait QueryHandler<Q> {
    type Output;
    type Error;

    async fn handle(&self, query: Q) -> Result<Self::Output, Self::Error>;
}

/// 读取生效配置
#[derive(Debug, Clone, Default)]
pub struct GetAllConfigQuery;

/// 读取生效配置
///
/// 存储中的配置可能被手工改坏；校验失败时记录告警并退回默认配置
pub struct GetAllConfigHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl GetAllConfigHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetAllConfigQuery> for GetAllConfigHandler {
    type Output = AppConfig;
    type Error = ConfigError;

    async fn handle(&self, _query: GetAllConfigQuery) -> Result<AppConfig, ConfigError> {
        let stored = self.repository.load().await?;
        match stored.validate() {
            Ok(()) => Ok(stored),
            Err(errors) => {
                tracing::warn!(
                    "[Config] Stored configuration rejected ({}), using defaults",
                    errors.join("; ")
                );
                Ok(AppConfig::default())
            }
        }
    }
}

/// 单个配置项（设置面板按键读取）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub key: String,
    pub value: serde_json::Value,
}

/// 按点分隔路径读取，例如 `reply.minDelayMs`
#[derive(Debug, Clone)]
pub struct GetConfigValueQuery {
    pub key: String,
}

impl GetConfigValueQuery {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

pub struct GetConfigValueHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl GetConfigValueHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetConfigValueQuery> for GetConfigValueHandler {
    type Output = Option<ConfigEntry>;
    type Error = ConfigError;

    async fn handle(&self, query: GetConfigValueQuery) -> Result<Option<ConfigEntry>, ConfigError> {
        let value = self.repository.get_value(&query.key).await?;
        Ok(value.map(|value| ConfigEntry {
            key: query.key,
            value,
        }))
    }
}
