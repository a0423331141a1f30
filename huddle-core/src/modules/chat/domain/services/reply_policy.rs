use rand::Rng;
use std::time::Duration;

pub const DEFAULT_REPLY_PROBABILITY: f64 = 0.5;
pub const DEFAULT_MIN_DELAY_MS: u64 = 8_000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 13_000;
pub const DEFAULT_REPLY_TEMPLATE: &str =
    "Thanks for your message! This is an automated reply from {name}.";

/// 自动回复策略
///
/// 每次用户发送独立掷一次硬币（概率 `probability`），命中后在
/// `[min_delay, max_delay)` 内均匀抽取延迟
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyPolicy {
    probability: f64,
    min_delay_ms: u64,
    max_delay_ms: u64,
    template: String,
}

impl ReplyPolicy {
    /// 概率被限制在 [0, 1]，NaN 视为 0
    pub fn new(probability: f64, min_delay_ms: u64, max_delay_ms: u64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };

        Self {
            probability,
            min_delay_ms,
            max_delay_ms: max_delay_ms.max(min_delay_ms),
            template: DEFAULT_REPLY_TEMPLATE.to_string(),
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// 决定是否回复；命中时返回延迟
    ///
    /// 每次调用消耗一次硬币抽样，命中时再消耗一次延迟抽样
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Duration> {
        if !rng.gen_bool(self.probability) {
            return None;
        }

        let delay_ms = if self.max_delay_ms > self.min_delay_ms {
            rng.gen_range(self.min_delay_ms..self.max_delay_ms)
        } else {
            self.min_delay_ms
        };
        Some(Duration::from_millis(delay_ms))
    }

    /// 自动回复正文
    pub fn reply_text(&self, counterpart_name: &str) -> String {
        self.template.replace("{name}", counterpart_name)
    }

    /// 回复对应的通知正文
    pub fn notification_body(&self, counterpart_name: &str) -> String {
        format!("{}: Thanks for your message!", counterpart_name)
    }
}

impl Default for ReplyPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_REPLY_PROBABILITY,
            DEFAULT_MIN_DELAY_MS,
            DEFAULT_MAX_DELAY_MS,
        )
    }
}
