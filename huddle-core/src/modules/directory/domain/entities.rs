// Directory Domain Entities

use serde::{Deserialize, Serialize};

use super::value_objects::{CounterpartId, Presence};

/// 联系人（花名册条目）
///
/// 启动时一次性提供，本模块内不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterpart {
    id: CounterpartId,
    name: String,
    avatar_ref: String,
    presence: Presence,
}

impl Counterpart {
    pub fn new(
        id: impl Into<CounterpartId>,
        name: impl Into<String>,
        avatar_ref: impl Into<String>,
        presence: Presence,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_ref: avatar_ref.into(),
            presence,
        }
    }

    pub fn id(&self) -> &CounterpartId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar_ref(&self) -> &str {
        &self.avatar_ref
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }
}

/// 联系人扩展资料（资料卡片）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartProfile {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
    pub bio: String,
}
