use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactSubmission, MessageFilter,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Stores the submission unread, stamped with the current time.
    async fn create(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: MessageFilter,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<ContactMessage, ContactMessageRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError>;

    /// Returns how many rows matched.
    async fn set_read(&self, ids: &[Uuid], read: bool)
        -> Result<u64, ContactMessageRepositoryError>;
}
