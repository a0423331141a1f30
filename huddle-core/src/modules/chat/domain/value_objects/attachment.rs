use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// 附件标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(String);

impl AttachmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 附件类型，同时作为选择器（图片 / 普通文件）的区分标志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    File,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::File => "file",
        }
    }
}

/// 格式化文件大小
///
/// 三档规则：`<1024` 为整数 "N B"，`<1 MiB` 为一位小数 "N.N KB"，其余为 "N.N MB"
pub fn format_size_label(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", one_decimal(bytes, KIB))
    } else {
        format!("{:.1} MB", one_decimal(bytes, MIB))
    }
}

/// 保留一位小数，恰好落在 .x5 时向上进位
fn one_decimal(bytes: u64, unit: u64) -> f64 {
    (bytes as f64 * 10.0 / unit as f64).round() / 10.0
}
