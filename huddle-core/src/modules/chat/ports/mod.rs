// Chat Ports Layer
// 端口定义了模块与外部世界的接口

mod conversation_repository;
mod reply_scheduler;

pub use conversation_repository::*;
pub use reply_scheduler::*;
