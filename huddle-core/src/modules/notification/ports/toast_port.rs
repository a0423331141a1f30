use serde::{Deserialize, Serialize};

/// 默认 Toast 显示时长
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// 临时横幅（Toast）
///
/// 一次性展示，不属于通知流状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub duration_ms: u64,
}

impl Toast {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Toast 展示端口
///
/// 单向调用：通知中心依赖它，反之不成立
pub trait ToastPort: Send + Sync {
    fn show_transient_banner(&self, toast: Toast);
}
