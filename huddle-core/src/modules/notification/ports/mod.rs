// Notification Ports Layer

mod notification_repository;
mod toast_port;

pub use notification_repository::*;
pub use toast_port::*;
