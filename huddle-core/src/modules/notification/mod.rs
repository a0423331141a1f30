// Notification Module - 通知中心
//
// 全局通知流：已读状态、未读数统计、Toast 扇出
// - domain: 通知实体、通知流聚合根与事件
// - ports: 通知仓储与 Toast 端口
// - infrastructure: 内存仓储、Toast 适配器、历史数据
// - application: NotificationCenter 服务

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::NotificationCenter;
pub use domain::{
    MarkReadOutcome, Notification, NotificationDomainEvent, NotificationFeed, NotificationId,
    NotificationKind, NotificationSender,
};
pub use infrastructure::{
    seed_history, EventBusToastAdapter, InMemoryNotificationRepository, TracingToastAdapter,
};
pub use ports::{NotificationError, NotificationRepository, Toast, ToastPort};
