// 界面命令层：接收 camelCase 请求 DTO，返回 AppResult

pub mod chat;
pub mod config;
pub mod directory;
pub mod notification;

pub use chat::*;
pub use config::*;
pub use directory::*;
pub use notification::*;
