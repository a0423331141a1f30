use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::Message;
use crate::modules::directory::CounterpartId;

/// 仓储错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// 分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// 起始下标，超大页码饱和到 `usize::MAX`
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit as usize)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 50 }
    }
}

/// 分页结果
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: usize, pagination: Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            limit: pagination.limit,
        }
    }

    pub fn has_next(&self) -> bool {
        (self.page as usize).saturating_mul(self.limit as usize) < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit as usize) as u32
    }
}

/// 会话仓储端口
///
/// 每个联系人一条只追加的时间线，插入顺序即时间线顺序
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// 追加到时间线末尾，返回追加后的长度
    ///
    /// 同一会话内消息 ID 重复时返回 Conflict
    async fn append(
        &self,
        counterpart_id: &CounterpartId,
        message: &Message,
    ) -> Result<usize, RepositoryError>;

    /// 获取完整时间线；会话不存在时返回空列表
    async fn all_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<Vec<Message>, RepositoryError>;

    /// 分页获取时间线
    async fn find_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
        pagination: Pagination,
    ) -> Result<PaginatedResult<Message>, RepositoryError>;

    /// 获取会话的最后一条消息
    async fn last_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<Option<Message>, RepositoryError>;

    /// 获取会话的消息数量
    async fn count_by_counterpart(
        &self,
        counterpart_id: &CounterpartId,
    ) -> Result<usize, RepositoryError>;

    /// 已创建会话的联系人 ID（按 ID 排序）
    async fn counterpart_ids(&self) -> Result<Vec<CounterpartId>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 20).offset(), 0);
        assert_eq!(Pagination::new(3, 20).offset(), 40);
        assert_eq!(Pagination::new(0, 20).offset(), 0);
    }

    #[test]
    fn test_pagination_offset_large_page() {
        let pagination = Pagination::new(100_000, 100_000);
        assert_eq!(pagination.offset(), 99_999 * 100_000);

        let result = PaginatedResult::<u8>::new(Vec::new(), 3, Pagination::new(u32::MAX, u32::MAX));
        assert!(!result.has_next());
    }

    #[test]
    fn test_paginated_result_navigation() {
        let result = PaginatedResult::new(vec![1, 2], 5, Pagination::new(2, 2));

        assert!(result.has_prev());
        assert!(result.has_next());
        assert_eq!(result.total_pages(), 3);
    }
}
