use serde_json::Value;
use tokio::sync::broadcast;

use crate::modules::chat::ChatDomainEvent;
use crate::modules::notification::{NotificationDomainEvent, Toast};

/// 广播通道容量，慢订阅者落后超过此数量会收到 Lagged
const CHANNEL_CAPACITY: usize = 256;

#[derive(Clone, Debug)]
pub enum AppEvent {
    Chat(ChatDomainEvent),
    Notification(NotificationDomainEvent),
    Toast(Toast),
}

impl AppEvent {
    /// 界面侧订阅的事件名
    pub fn channel(&self) -> &'static str {
        match self {
            AppEvent::Chat(ChatDomainEvent::TimelineChanged(_)) => "chat:timeline_changed",
            AppEvent::Chat(ChatDomainEvent::ReplyScheduled(_)) => "chat:reply_scheduled",
            AppEvent::Chat(ChatDomainEvent::ReplyCancelled(_)) => "chat:reply_cancelled",
            AppEvent::Chat(ChatDomainEvent::ReplyDropped(_)) => "chat:reply_dropped",
            AppEvent::Notification(NotificationDomainEvent::Added { .. }) => "notification:added",
            AppEvent::Notification(NotificationDomainEvent::FeedChanged { .. }) => {
                "notification:changed"
            }
            AppEvent::Toast(_) => "toast:show",
        }
    }

    /// 序列化后的事件负载（camelCase JSON）
    pub fn payload(&self) -> Value {
        let result = match self {
            AppEvent::Chat(event) => serde_json::to_value(event),
            AppEvent::Notification(event) => serde_json::to_value(event),
            AppEvent::Toast(toast) => serde_json::to_value(toast),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("[EventBus] Failed to serialize {}: {}", self.channel(), e);
            Value::Null
        })
    }
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::debug!("[EventBus] Publishing {}: {:?}", event.channel(), event);
        // 没有订阅者时发送失败属正常情况
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::TimelineChangedEvent;
    use crate::modules::chat::MessageId;
    use crate::modules::directory::CounterpartId;
    use chrono::Utc;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        bus.publish(AppEvent::Toast(Toast::new("New Message", "hi")));

        match rx.recv().await.unwrap() {
            AppEvent::Toast(toast) => assert_eq!(toast.title, "New Message"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(AppEvent::Toast(Toast::new("t", "b")));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_payload_uses_camel_case() {
        let event = AppEvent::Chat(ChatDomainEvent::TimelineChanged(TimelineChangedEvent {
            counterpart_id: CounterpartId::from("1"),
            message_id: MessageId::new(),
            length: 3,
            timestamp: Utc::now(),
        }));

        assert_eq!(event.channel(), "chat:timeline_changed");
        let payload = event.payload();
        assert_eq!(payload["type"], "timelineChanged");
        assert_eq!(payload["counterpartId"], "1");
        assert_eq!(payload["length"], 3);
    }
}
