// Chat Application Layer - 应用层
// 实现 CQRS 模式的命令和查询处理器

pub mod commands;
pub mod conversation_store;
pub mod queries;

// 导出命令和查询
pub use commands::*;
pub use conversation_store::ConversationStore;
pub use queries::*;

use async_trait::async_trait;
use thiserror::Error;

use super::ports::RepositoryError;
use crate::modules::directory::DirectoryError;
use crate::modules::notification::NotificationError;

/// 应用层错误类型
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Message must contain text or at least one attachment")]
    InvalidSend,

    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    #[error("Directory error: {0}")]
    DirectoryError(#[from] DirectoryError),

    #[error("Notification error: {0}")]
    NotificationError(#[from] NotificationError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 命令处理器 trait
///
/// 遵循 CQRS 模式，命令处理器负责执行有副作用的操作
#[async_trait]
pub trait CommandHandler<C, R>: Send + Sync
where
    C: Send + Sync,
{
    /// 执行命令
    async fn handle(&self, command: C) -> Result<R, ApplicationError>;
}

/// 查询处理器 trait
///
/// 遵循 CQRS 模式，查询处理器负责只读操作
#[async_trait]
pub trait QueryHandler<Q, R>: Send + Sync
where
    Q: Send + Sync,
{
    /// 执行查询
    async fn handle(&self, query: Q) -> Result<R, ApplicationError>;
}
