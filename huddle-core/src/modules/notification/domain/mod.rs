// Notification Domain Layer
// 通知实体、通知流聚合根与领域事件

pub mod entities;
pub mod events;
pub mod feed;
pub mod value_objects;

pub use entities::Notification;
pub use events::NotificationDomainEvent;
pub use feed::NotificationFeed;
pub use value_objects::{MarkReadOutcome, NotificationId, NotificationKind, NotificationSender};
