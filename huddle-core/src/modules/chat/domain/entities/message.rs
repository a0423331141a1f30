use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::{MessageId, SenderId};
use super::Attachment;
use crate::modules::directory::CounterpartId;

/// 预览文本的最大字符数
const PREVIEW_CHARS: usize = 40;

/// 消息实体
///
/// 追加到会话后不可变：没有任何 setter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    sender_id: SenderId,
    content: String,
    attachments: Vec<Attachment>,
    created_at: DateTime<Utc>,
}

impl Message {
    /// 当前用户发出的消息
    pub fn new_outgoing(content: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            id: MessageId::new(),
            sender_id: SenderId::current_user(),
            content: content.into(),
            attachments,
            created_at: Utc::now(),
        }
    }

    /// 联系人发来的消息
    pub fn new_incoming(counterpart_id: &CounterpartId, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender_id: SenderId::counterpart(counterpart_id),
            content: content.into(),
            attachments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// 从已有数据恢复（用于示例会话）
    pub fn restore(
        sender_id: SenderId,
        content: impl Into<String>,
        attachments: Vec<Attachment>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            sender_id,
            content: content.into(),
            attachments,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_from_current_user(&self) -> bool {
        self.sender_id.is_current_user()
    }

    /// 会话列表中显示的摘要；纯附件消息显示首个附件名
    pub fn preview(&self) -> String {
        let text = self.content.trim();
        if text.is_empty() {
            return self
                .attachments
                .first()
                .map(|a| a.display_name().to_string())
                .unwrap_or_default();
        }

        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        if text.chars().count() > PREVIEW_CHARS {
            format!("{}...", preview)
        } else {
            preview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::AttachmentKind;

    #[test]
    fn test_create_outgoing_message() {
        let msg = Message::new_outgoing("hello", Vec::new());

        assert!(msg.is_from_current_user());
        assert_eq!(msg.sender_id().as_str(), "current");
        assert_eq!(msg.content(), "hello");
        assert!(msg.attachments().is_empty());
    }

    #[test]
    fn test_create_incoming_message() {
        let counterpart = CounterpartId::from("2");
        let msg = Message::new_incoming(&counterpart, "Thanks!");

        assert!(!msg.is_from_current_user());
        assert_eq!(msg.sender_id().as_counterpart(), Some(counterpart));
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let msg = Message::new_outgoing("a".repeat(50), Vec::new());
        assert_eq!(msg.preview(), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn test_preview_falls_back_to_attachment_name() {
        let attachment = Attachment::new(
            AttachmentKind::File,
            "session://attachments/x",
            "report.pdf",
            Some("2.8 MB".to_string()),
        );
        let msg = Message::new_outgoing("   ", vec![attachment]);
        assert_eq!(msg.preview(), "report.pdf");
    }
}
