// Attachment Registry
//
// 将本地选择的文件转换为可展示的附件记录，文件内容只保存在当前进程

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::chat::domain::{format_size_label, Attachment, AttachmentKind};

/// 会话内资源引用前缀
pub const RESOURCE_SCHEME: &str = "session://attachments/";

/// 选择器交给注册表的单个文件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

pub struct AttachmentRegistry {
    blobs: RwLock<HashMap<String, Arc<Vec<u8>>>>,
}

impl AttachmentRegistry {
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// 登记一次选择的全部文件，按输入顺序返回附件
    pub async fn register(&self, kind: AttachmentKind, files: Vec<SelectedFile>) -> Vec<Attachment> {
        let mut blobs = self.blobs.write().await;

        files
            .into_iter()
            .map(|file| {
                let resource_ref = format!("{}{}", RESOURCE_SCHEME, Uuid::new_v4());
                let size_label = format_size_label(file.bytes.len() as u64);

                tracing::debug!(
                    "[AttachmentRegistry] Registered {} {} ({})",
                    kind.as_str(),
                    file.name,
                    size_label
                );

                blobs.insert(resource_ref.clone(), Arc::new(file.bytes));
                Attachment::new(kind, resource_ref, file.name, Some(size_label))
            })
            .collect()
    }

    /// 图片选择器入口
    pub async fn register_images(&self, files: Vec<SelectedFile>) -> Vec<Attachment> {
        self.register(AttachmentKind::Image, files).await
    }

    /// 普通文件选择器入口
    pub async fn register_files(&self, files: Vec<SelectedFile>) -> Vec<Attachment> {
        self.register(AttachmentKind::File, files).await
    }

    /// 按资源引用取回文件内容
    pub async fn resolve(&self, resource_ref: &str) -> Option<Arc<Vec<u8>>> {
        self.blobs.read().await.get(resource_ref).cloned()
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

impl Default for AttachmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
