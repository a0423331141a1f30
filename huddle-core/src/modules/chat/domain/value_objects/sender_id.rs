use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::directory::CounterpartId;

/// 当前用户的固定发送者 ID
pub const CURRENT_USER_ID: &str = "current";

/// 消息发送者
///
/// 当前用户固定为 "current"，其余为联系人 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenderId(String);

impl SenderId {
    pub fn current_user() -> Self {
        Self(CURRENT_USER_ID.to_string())
    }

    pub fn counterpart(id: &CounterpartId) -> Self {
        Self(id.as_str().to_string())
    }

    pub fn is_current_user(&self) -> bool {
        self.0 == CURRENT_USER_ID
    }

    /// 若发送者为联系人，返回其 ID
    pub fn as_counterpart(&self) -> Option<CounterpartId> {
        if self.is_current_user() {
            None
        } else {
            Some(CounterpartId::new(self.0.clone()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_sender() {
        let sender = SenderId::current_user();
        assert!(sender.is_current_user());
        assert!(sender.as_counterpart().is_none());
        assert_eq!(serde_json::to_string(&sender).unwrap(), "\"current\"");
    }

    #[test]
    fn test_counterpart_sender() {
        let sender = SenderId::counterpart(&CounterpartId::from("3"));
        assert!(!sender.is_current_user());
        assert_eq!(sender.as_counterpart(), Some(CounterpartId::from("3")));
    }
}
