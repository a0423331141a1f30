// 日志初始化
//
// RUST_LOG 优先于配置中的级别

use tracing_subscriber::EnvFilter;

use crate::modules::config::LoggingConfig;

/// 安装全局 fmt subscriber，重复调用时返回 false
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("huddle_core={}", config.level.as_str())));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            "[Logging] Tracing initialized at level {}",
            config.level.as_str()
        );
    }
    installed
}
