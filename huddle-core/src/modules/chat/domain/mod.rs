// Chat Domain Layer
// 领域层包含消息实体、附件、草稿、回复策略和领域事件

pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;

// 重导出常用类型
pub use entities::{is_sendable, Attachment, Draft, Message};
pub use events::*;
pub use services::ReplyPolicy;
pub use value_objects::{
    format_size_label, AttachmentId, AttachmentKind, MessageId, SenderId, CURRENT_USER_ID,
};
