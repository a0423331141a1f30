use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::{MarkReadOutcome, Notification, NotificationFeed, NotificationId};

/// 通知仓储错误类型
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// 通知流仓储端口
///
/// 所有对通知流的修改都通过此端口完成（单写者）
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// 插入到通知流最前
    async fn prepend(&self, notification: &Notification) -> Result<(), NotificationError>;

    /// 标记单条已读
    async fn mark_as_read(&self, id: NotificationId) -> Result<MarkReadOutcome, NotificationError>;

    /// 全部标记为已读，返回变化条目数
    async fn mark_all_as_read(&self) -> Result<usize, NotificationError>;

    /// 清空，返回移除条目数
    async fn clear(&self) -> Result<usize, NotificationError>;

    /// 按最新在前列出
    async fn list(&self) -> Result<Vec<Notification>, NotificationError>;

    async fn get(&self, id: NotificationId) -> Result<Option<Notification>, NotificationError>;

    /// 未读数（实时统计）
    async fn unread_count(&self) -> Result<usize, NotificationError>;

    async fn count(&self) -> Result<usize, NotificationError>;

    /// 同一次读锁内复制整个通知流，条目与未读数保持一致
    async fn snapshot(&self) -> Result<NotificationFeed, NotificationError>;
}
