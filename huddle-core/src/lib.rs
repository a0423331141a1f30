pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::path::Path;

pub use infrastructure::{init_tracing, AppEvent, AppState, EventBus};
pub use modules::{ChatModule, ConfigModule, InMemoryDirectory, NotificationCenter};
pub use shared::{AppError, AppResult};

/// 启动：读取数据目录下的配置，初始化日志并组装全部服务
///
/// 宿主程序持有返回的 `AppState`，并订阅 `event_bus` 把事件转发给界面
pub async fn start(data_dir: impl AsRef<Path>) -> AppResult<AppState> {
    let config_module = ConfigModule::new_with_file(data_dir);
    let config = config_module.get_all().await?;
    init_tracing(&config.logging);

    tracing::info!("Huddle starting...");
    AppState::bootstrap(config_module).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::directory::CounterpartDirectory;

    #[tokio::test]
    async fn test_start_with_empty_data_dir() {
        let dir = tempfile::tempdir().unwrap();

        let state = start(dir.path()).await.unwrap();

        assert_eq!(state.config.general.current_user_name, "You");
        assert_eq!(state.directory.list().await.unwrap().len(), 5);
    }
}
