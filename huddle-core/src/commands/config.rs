// Config Commands
//
// 配置修改写入仓储，下次启动时生效

use serde::Deserialize;

use crate::infrastructure::AppState;
use crate::modules::config::{AppConfig, ConfigEntry, PartialAppConfig};
use crate::shared::AppResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigKeyRequest {
    pub key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetConfigValueRequest {
    pub key: String,
    pub value: serde_json::Value,
}

pub async fn config_get_all(state: &AppState) -> AppResult<AppConfig> {
    Ok(state.config_module.get_all().await?)
}

pub async fn config_update(state: &AppState, partial: PartialAppConfig) -> AppResult<AppConfig> {
    Ok(state.config_module.update(partial).await?)
}

/// 设置面板按键读取，键不存在时返回 None
pub async fn config_get_value(
    state: &AppState,
    request: ConfigKeyRequest,
) -> AppResult<Option<ConfigEntry>> {
    Ok(state.config_module.get_value(&request.key).await?)
}

pub async fn config_set_value(
    state: &AppState,
    request: SetConfigValueRequest,
) -> AppResult<AppConfig> {
    tracing::debug!("[config_set_value] {}", request.key);
    Ok(state
        .config_module
        .set_value(&request.key, request.value)
        .await?)
}

pub async fn config_reset(state: &AppState) -> AppResult<AppConfig> {
    Ok(state.config_module.reset().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::PartialReplyConfig;
    use crate::shared::AppError;

    #[tokio::test]
    async fn test_invalid_update_is_rejected() {
        let state = AppState::in_memory().await.unwrap();

        let result = config_update(
            &state,
            PartialAppConfig {
                reply: Some(PartialReplyConfig {
                    probability: Some(2.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::ConfigError(_))));
        assert_eq!(config_get_all(&state).await.unwrap().reply.probability, 0.5);
    }

    #[tokio::test]
    async fn test_set_and_read_single_value() {
        let state = AppState::in_memory().await.unwrap();

        let request: SetConfigValueRequest =
            serde_json::from_str(r#"{"key":"notification.toastDurationMs","value":3000}"#).unwrap();
        let updated = config_set_value(&state, request).await.unwrap();
        assert_eq!(updated.notification.toast_duration_ms, 3000);

        let entry = config_get_value(
            &state,
            ConfigKeyRequest {
                key: "notification.toastDurationMs".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(entry.value, serde_json::json!(3000));

        let unknown = config_set_value(
            &state,
            SetConfigValueRequest {
                key: "notification.sound".to_string(),
                value: serde_json::json!(true),
            },
        )
        .await;
        assert!(matches!(unknown, Err(AppError::ConfigError(_))));
    }
}
