// Directory Value Objects
//
// 联系人相关的值对象定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 联系人标识符
///
/// 花名册提供的 ID 为不透明字符串（如 "1"），不做格式校验
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterpartId(String);

impl CounterpartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CounterpartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CounterpartId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CounterpartId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// 在线状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    #[default]
    Offline,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Away => "away",
            Presence::Offline => "offline",
        }
    }

    /// 状态栏显示文本
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Away => "Away",
            Presence::Offline => "Offline",
        }
    }
}

impl From<&str> for Presence {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "online" => Presence::Online,
            "away" => Presence::Away,
            _ => Presence::Offline,
        }
    }
}
