use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::content_item::{
    ContentItem, ListFilter, ListingPatch, Record,
};
use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ManageContentError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Record not found")]
    NotFound,

    #[error("A record of this kind already exists")]
    SingletonExists,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ManageContentError {
    pub fn invalid(field: &str, code: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, code, message);
        ManageContentError::Validation(errors)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Admin operations over one content kind.
#[async_trait]
pub trait ManageContentUseCase<T: ContentItem>: Send + Sync {
    async fn list(&self, filter: ListFilter) -> Result<Vec<Record<T>>, ManageContentError>;

    async fn get(&self, id: Uuid) -> Result<Record<T>, ManageContentError>;

    async fn create(&self, item: T) -> Result<Record<T>, ManageContentError>;

    async fn update(&self, id: Uuid, item: T) -> Result<Record<T>, ManageContentError>;

    /// Inline edit of `display_order` / `is_active`.
    async fn patch_listing(
        &self,
        id: Uuid,
        patch: ListingPatch,
    ) -> Result<Record<T>, ManageContentError>;

    async fn delete(&self, id: Uuid) -> Result<(), ManageContentError>;

    async fn bulk_set_active(
        &self,
        ids: Vec<Uuid>,
        active: bool,
    ) -> Result<u64, ManageContentError>;
}
