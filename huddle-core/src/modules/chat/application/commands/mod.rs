// Chat Commands - 有副作用的操作

mod close_conversation;
mod deliver_reply;
mod send_message;

pub use close_conversation::*;
pub use deliver_reply::*;
pub use send_message::*;
