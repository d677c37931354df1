use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactForm, ContactMessage};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Validate, persist, then notify. Notification failures never fail the call.
#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<ContactMessage, SubmitContactError>;
}
