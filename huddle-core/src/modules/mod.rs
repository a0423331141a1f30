// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - chat: 会话时间线、附件与自动回复
// - config: 配置模块，处理应用设置
// - directory: 联系人花名册
// - notification: 通知流与 Toast

pub mod chat;
pub mod config;
pub mod directory;
pub mod notification;

pub use chat::ChatModule;
pub use config::ConfigModule;
pub use directory::InMemoryDirectory;
pub use notification::NotificationCenter;
