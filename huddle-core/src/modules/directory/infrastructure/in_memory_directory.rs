use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::directory::domain::{Counterpart, CounterpartId, CounterpartProfile};
use crate::modules::directory::ports::{CounterpartDirectory, DirectoryError};

use super::sample_roster::{sample_profiles, sample_roster};

/// 内存花名册
///
/// 保持启动时提供的顺序；`insert`/`remove` 仅供宿主程序调整花名册
pub struct InMemoryDirectory {
    roster: RwLock<Vec<Counterpart>>,
    profiles: RwLock<HashMap<CounterpartId, CounterpartProfile>>,
}

impl InMemoryDirectory {
    pub fn new(roster: Vec<Counterpart>) -> Self {
        Self {
            roster: RwLock::new(roster),
            profiles: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_profiles(
        roster: Vec<Counterpart>,
        profiles: impl IntoIterator<Item = (CounterpartId, CounterpartProfile)>,
    ) -> Self {
        Self {
            roster: RwLock::new(roster),
            profiles: RwLock::new(profiles.into_iter().collect()),
        }
    }

    /// 内置示例花名册（五位联系人及其资料）
    pub fn sample() -> Self {
        Self::with_profiles(sample_roster(), sample_profiles())
    }

    /// 追加联系人，ID 重复时拒绝
    pub async fn insert(&self, counterpart: Counterpart) -> Result<(), DirectoryError> {
        let mut roster = self.roster.write().await;
        if roster.iter().any(|c| c.id() == counterpart.id()) {
            return Err(DirectoryError::Duplicate(counterpart.id().to_string()));
        }
        roster.push(counterpart);
        Ok(())
    }

    /// 移除联系人，返回被移除的条目
    pub async fn remove(&self, id: &CounterpartId) -> Option<Counterpart> {
        let removed = {
            let mut roster = self.roster.write().await;
            let index = roster.iter().position(|c| c.id() == id)?;
            roster.remove(index)
        };

        self.profiles.write().await.remove(id);
        tracing::debug!("[Directory] Removed counterpart {}", id);
        Some(removed)
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CounterpartDirectory for InMemoryDirectory {
    async fn get(&self, id: &CounterpartId) -> Result<Option<Counterpart>, DirectoryError> {
        let roster = self.roster.read().await;
        Ok(roster.iter().find(|c| c.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Counterpart>, DirectoryError> {
        Ok(self.roster.read().await.clone())
    }

    async fn profile(
        &self,
        id: &CounterpartId,
    ) -> Result<Option<CounterpartProfile>, DirectoryError> {
        Ok(self.profiles.read().await.get(id).cloned())
    }
}
