use thiserror::Error;

use crate::modules::chat::{ApplicationError, RepositoryError};
use crate::modules::config::ConfigError;
use crate::modules::directory::DirectoryError;
use crate::modules::notification::NotificationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Chat error: {0}")]
    ChatError(#[from] ApplicationError),

    #[error("Storage error: {0}")]
    StorageError(#[from] RepositoryError),

    #[error("Directory error: {0}")]
    DirectoryError(#[from] DirectoryError),

    #[error("Notification error: {0}")]
    NotificationError(#[from] NotificationError),

    #[error("Counterpart not found: {0}")]
    CounterpartNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_serializes_as_message() {
        let error = AppError::from(ApplicationError::InvalidSend);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json,
            "\"Chat error: Message must contain text or at least one attachment\""
        );
    }
}
