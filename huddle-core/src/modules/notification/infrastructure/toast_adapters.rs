// Toast Adapters
//
// ToastPort 的具体实现：
// - EventBusToastAdapter: 通过事件总线转发给界面层
// - TracingToastAdapter: 仅记录日志（无界面时使用）

use std::sync::Arc;

use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::notification::ports::{Toast, ToastPort};

pub struct EventBusToastAdapter {
    event_bus: Arc<EventBus>,
}

impl EventBusToastAdapter {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }
}

impl ToastPort for EventBusToastAdapter {
    fn show_transient_banner(&self, toast: Toast) {
        self.event_bus.publish(AppEvent::Toast(toast));
    }
}

pub struct TracingToastAdapter;

impl ToastPort for TracingToastAdapter {
    fn show_transient_banner(&self, toast: Toast) {
        tracing::info!(
            "[Toast] {}: {} ({}ms)",
            toast.title,
            toast.body,
            toast.duration_ms
        );
    }
}
