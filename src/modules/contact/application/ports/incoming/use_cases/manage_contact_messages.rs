use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactMessage, MessageFilter};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ManageMessagesError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ManageContactMessagesUseCase: Send + Sync {
    async fn list(&self, filter: MessageFilter) -> Result<Vec<ContactMessage>, ManageMessagesError>;

    async fn get(&self, id: Uuid) -> Result<ContactMessage, ManageMessagesError>;

    async fn delete(&self, id: Uuid) -> Result<(), ManageMessagesError>;

    async fn mark(&self, ids: Vec<Uuid>, read: bool) -> Result<u64, ManageMessagesError>;
}
