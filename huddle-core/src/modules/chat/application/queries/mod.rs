// Chat Queries - 只读操作

mod list_conversations;
mod list_messages;

pub use list_conversations::*;
pub use list_messages::*;
