// Chat Infrastructure Layer
// 基础设施层包含端口的具体实现

pub mod attachment_registry;
pub mod repositories;
pub mod sample_conversations;
pub mod scheduler;

// 重导出常用类型
pub use attachment_registry::{AttachmentRegistry, SelectedFile, RESOURCE_SCHEME};
pub use repositories::InMemoryConversationRepository;
pub use sample_conversations::sample_conversations;
pub use scheduler::TokioReplyScheduler;
