use serde::{Deserialize, Serialize};

use super::super::value_objects::{AttachmentId, AttachmentKind};

/// 附件记录
///
/// 选择文件时创建，之后不再修改。`resource_ref` 仅在当前进程会话内有效
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    id: AttachmentId,
    kind: AttachmentKind,
    resource_ref: String,
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_label: Option<String>,
}

impl Attachment {
    pub fn new(
        kind: AttachmentKind,
        resource_ref: impl Into<String>,
        display_name: impl Into<String>,
        size_label: Option<String>,
    ) -> Self {
        Self::with_id(AttachmentId::new(), kind, resource_ref, display_name, size_label)
    }

    pub fn with_id(
        id: AttachmentId,
        kind: AttachmentKind,
        resource_ref: impl Into<String>,
        display_name: impl Into<String>,
        size_label: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            resource_ref: resource_ref.into(),
            display_name: display_name.into(),
            size_label,
        }
    }

    pub fn id(&self) -> &AttachmentId {
        &self.id
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    pub fn resource_ref(&self) -> &str {
        &self.resource_ref
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn size_label(&self) -> Option<&str> {
        self.size_label.as_deref()
    }
}
