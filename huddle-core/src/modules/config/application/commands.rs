// Config Commands
//
// 配置相关的命令处理器

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::config::domain::{AppConfig, PartialAppConfig};
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler<C> {
    type Output;
    type Error;

    async fn handle(&self, command: C) -> Result<Self::Output, Self::Error>;
}

/// 校验通过后保存
async fn validate_and_save(
    repository: &dyn ConfigRepository,
    config: &AppConfig,
) -> Result<(), ConfigError> {
    config
        .validate()
        .map_err(|errors| ConfigError::ValidationError { errors })?;
    repository.save(config).await
}

// ============================================================================
// Update Config Command
// ============================================================================

/// 更新配置命令
#[derive(Debug, Clone)]
pub struct UpdateConfigCommand {
    pub partial: PartialAppConfig,
}

impl UpdateConfigCommand {
    pub fn new(partial: PartialAppConfig) -> Self {
        Self { partial }
    }
}

/// 更新配置命令处理器
pub struct UpdateConfigHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl UpdateConfigHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<UpdateConfigCommand> for UpdateConfigHandler {
    type Output = AppConfig;
    type Error = ConfigError;

    async fn handle(&self, command: UpdateConfigCommand) -> Result<Self::Output, Self::Error> {
        let mut config = self.repository.load().await?;
        config.merge(command.partial);

        validate_and_save(self.repository.as_ref(), &config).await?;
        Ok(config)
    }
}

// ============================================================================
// Reset Config Command
// ============================================================================

/// 重置配置命令
#[derive(Debug, Clone)]
pub struct ResetConfigCommand;

/// 重置配置命令处理器
pub struct ResetConfigHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl ResetConfigHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<ResetConfigCommand> for ResetConfigHandler {
    type Output = AppConfig;
    type Error = ConfigError;

    async fn handle(&self, _command: ResetConfigCommand) -> Result<Self::Output, Self::Error> {
        // 清除现有配置后重新加载默认值
        self.repository.clear().await?;
        self.repository.load().await
    }
}

// ============================================================================
// Set Config Value Command
// ============================================================================

/// 设置配置值命令，键为点分隔路径
#[derive(Debug, Clone)]
pub struct SetConfigValueCommand {
    pub key: String,
    pub value: serde_json::Value,
}

impl SetConfigValueCommand {
    pub fn new(key: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// 设置配置值命令处理器
pub struct SetConfigValueHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl SetConfigValueHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<SetConfigValueCommand> for SetConfigValueHandler {
    type Output = AppConfig;
    type Error = ConfigError;

    async fn handle(&self, command: SetConfigValueCommand) -> Result<Self::Output, Self::Error> {
        let config = self.repository.load().await?;
        let mut config_json = serde_json::to_value(&config)?;

        let parts: Vec<&str> = command.key.split('.').collect();
        set_nested_value(&mut config_json, &parts, command.value)?;

        // 转换回 AppConfig，类型不符时报错
        let config: AppConfig = serde_json::from_value(config_json)?;
        validate_and_save(self.repository.as_ref(), &config).await?;
        Ok(config)
    }
}

/// 设置嵌套的 JSON 值，只允许覆盖已有的键
fn set_nested_value(
    json: &mut serde_json::Value,
    parts: &[&str],
    value: serde_json::Value,
) -> Result<(), ConfigError> {
    let Some((last, parents)) = parts.split_last() else {
        return Err(ConfigError::Invalid("Empty key path".to_string()));
    };

    let mut current = json;
    for part in parents {
        current = current
            .get_mut(*part)
            .ok_or_else(|| ConfigError::Invalid(format!("Unknown key: {}", parts.join("."))))?;
    }

    match current.get_mut(*last) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(ConfigError::Invalid(format!(
            "Unknown key: {}",
            parts.join(".")
        ))),
    }
}
