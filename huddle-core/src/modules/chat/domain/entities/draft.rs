use super::super::value_objects::AttachmentId;
use super::Attachment;

/// 待发送的草稿（输入框内容 + 已选附件）
///
/// 文本与附件相互独立：文本去空白后非空，或至少带一个附件即可发送
#[derive(Debug, Clone, Default)]
pub struct Draft {
    text: String,
    attachments: Vec<Attachment>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_text(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// 追加一批附件（可多次选择后再发送）
    pub fn add_attachments(&mut self, attachments: impl IntoIterator<Item = Attachment>) {
        self.attachments.extend(attachments);
    }

    pub fn remove_attachment(&mut self, id: &AttachmentId) -> bool {
        let before = self.attachments.len();
        self.attachments.retain(|a| a.id() != id);
        self.attachments.len() != before
    }

    pub fn is_sendable(&self) -> bool {
        is_sendable(&self.text, &self.attachments)
    }

    /// 取出内容并重置草稿
    pub fn take(&mut self) -> (String, Vec<Attachment>) {
        (
            std::mem::take(&mut self.text),
            std::mem::take(&mut self.attachments),
        )
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.attachments.clear();
    }
}

/// 发送校验规则
pub fn is_sendable(text: &str, attachments: &[Attachment]) -> bool {
    !text.trim().is_empty() || !attachments.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::AttachmentKind;

    fn file(name: &str) -> Attachment {
        Attachment::new(AttachmentKind::File, "session://attachments/1", name, None)
    }

    #[test]
    fn test_empty_draft_not_sendable() {
        let mut draft = Draft::new();
        assert!(!draft.is_sendable());

        draft.set_text("  \n\t ");
        assert!(!draft.is_sendable());
    }

    #[test]
    fn test_attachment_only_draft_sendable() {
        let mut draft = Draft::new();
        draft.add_attachments(vec![file("a.pdf")]);
        assert!(draft.is_sendable());
    }

    #[test]
    fn test_remove_attachment() {
        let mut draft = Draft::new();
        let first = file("a.pdf");
        let first_id = first.id().clone();
        draft.add_attachments(vec![first, file("b.pdf")]);

        assert!(draft.remove_attachment(&first_id));
        assert!(!draft.remove_attachment(&first_id));
        assert_eq!(draft.attachments().len(), 1);
        assert_eq!(draft.attachments()[0].display_name(), "b.pdf");
    }

    #[test]
    fn test_take_resets_draft() {
        let mut draft = Draft::new();
        draft.set_text("hello");
        draft.push_text(" 😊");
        draft.add_attachments(vec![file("a.pdf")]);

        let (text, attachments) = draft.take();
        assert_eq!(text, "hello 😊");
        assert_eq!(attachments.len(), 1);
        assert!(!draft.is_sendable());
    }
}
