// Config Domain Entities
//
// 配置领域实体定义

use serde::{Deserialize, Serialize};

use super::value_objects::LogLevel;

/// 通用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralConfig {
    pub current_user_name: String,
    pub current_user_avatar: Option<String>,
    /// 启动时载入示例会话
    pub seed_sample_data: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            current_user_name: "You".to_string(),
            current_user_avatar: None,
            seed_sample_data: true,
        }
    }
}

/// 自动回复配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplyConfig {
    pub enabled: bool,
    pub probability: f64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// `{name}` 替换为联系人名称
    pub template: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probability: 0.5,
            min_delay_ms: 8_000,
            max_delay_ms: 13_000,
            template: "Thanks for your message! This is an automated reply from {name}."
                .to_string(),
        }
    }
}

/// 通知配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationConfig {
    pub toast_duration_ms: u64,
    /// 启动时载入历史通知
    pub seed_history: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5_000,
            seed_history: true,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            with_target: true,
        }
    }
}

/// 应用配置聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub reply: ReplyConfig,
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并部分配置更新
    pub fn merge(&mut self, partial: PartialAppConfig) {
        if let Some(general) = partial.general {
            if let Some(name) = general.current_user_name {
                self.general.current_user_name = name;
            }
            if let Some(avatar) = general.current_user_avatar {
                self.general.current_user_avatar = Some(avatar);
            }
            if let Some(seed) = general.seed_sample_data {
                self.general.seed_sample_data = seed;
            }
        }

        if let Some(reply) = partial.reply {
            if let Some(enabled) = reply.enabled {
                self.reply.enabled = enabled;
            }
            if let Some(probability) = reply.probability {
                self.reply.probability = probability;
            }
            if let Some(min_delay_ms) = reply.min_delay_ms {
                self.reply.min_delay_ms = min_delay_ms;
            }
            if let Some(max_delay_ms) = reply.max_delay_ms {
                self.reply.max_delay_ms = max_delay_ms;
            }
            if let Some(template) = reply.template {
                self.reply.template = template;
            }
        }

        if let Some(notification) = partial.notification {
            if let Some(duration) = notification.toast_duration_ms {
                self.notification.toast_duration_ms = duration;
            }
            if let Some(seed) = notification.seed_history {
                self.notification.seed_history = seed;
            }
        }

        if let Some(logging) = partial.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(with_target) = logging.with_target {
                self.logging.with_target = with_target;
            }
        }
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.reply.probability) {
            errors.push("Reply probability must be between 0 and 1".to_string());
        }
        if self.reply.min_delay_ms >= self.reply.max_delay_ms {
            errors.push("Reply minDelayMs must be less than maxDelayMs".to_string());
        }
        if self.notification.toast_duration_ms == 0 {
            errors.push("Toast duration must be greater than zero".to_string());
        }
        if self.general.current_user_name.trim().is_empty() {
            errors.push("Current user name must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 按点分隔路径读取配置值，如 "reply.probability"
    pub fn value_at(&self, key: &str) -> Result<Option<serde_json::Value>, serde_json::Error> {
        let config_json = serde_json::to_value(self)?;

        let mut current = &config_json;
        for part in key.split('.') {
            match current.get(part) {
                Some(v) => current = v,
                None => return Ok(None),
            }
        }

        Ok(Some(current.clone()))
    }
}

/// 部分配置更新（用于合并）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialAppConfig {
    pub general: Option<PartialGeneralConfig>,
    pub reply: Option<PartialReplyConfig>,
    pub notification: Option<PartialNotificationConfig>,
    pub logging: Option<PartialLoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialGeneralConfig {
    pub current_user_name: Option<String>,
    pub current_user_avatar: Option<String>,
    pub seed_sample_data: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialReplyConfig {
    pub enabled: Option<bool>,
    pub probability: Option<f64>,
    pub min_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub template: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialNotificationConfig {
    pub toast_duration_ms: Option<u64>,
    pub seed_history: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialLoggingConfig {
    pub level: Option<LogLevel>,
    pub with_target: Option<bool>,
}
