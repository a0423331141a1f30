// Notification Infrastructure Layer

mod in_memory_notification_repository;
mod seed_history;
mod toast_adapters;

pub use in_memory_notification_repository::*;
pub use seed_history::*;
pub use toast_adapters::*;
