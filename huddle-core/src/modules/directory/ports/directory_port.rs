use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::{Counterpart, CounterpartId, CounterpartProfile};

/// 花名册错误类型
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Directory unavailable: {0}")]
    Unavailable(String),

    #[error("Duplicate counterpart: {0}")]
    Duplicate(String),
}

/// 联系人花名册端口
///
/// 对本核心只读；由外部在启动时提供
#[async_trait]
pub trait CounterpartDirectory: Send + Sync {
    /// 按 ID 查找联系人
    async fn get(&self, id: &CounterpartId) -> Result<Option<Counterpart>, DirectoryError>;

    /// 按花名册顺序列出全部联系人
    async fn list(&self) -> Result<Vec<Counterpart>, DirectoryError>;

    /// 获取联系人扩展资料
    async fn profile(
        &self,
        id: &CounterpartId,
    ) -> Result<Option<CounterpartProfile>, DirectoryError>;

    /// 检查联系人是否仍在花名册中
    async fn contains(&self, id: &CounterpartId) -> Result<bool, DirectoryError> {
        Ok(self.get(id).await?.is_some())
    }
}
