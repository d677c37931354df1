use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSeed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created(Uuid),
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapAdminError {
    #[error("Invalid admin seed: {0}")]
    InvalidSeed(String),

    #[error("Hashing error: {0}")]
    HashError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Creates the admin account once; later runs are no-ops.
#[async_trait]
pub trait BootstrapAdminUseCase: Send + Sync {
    async fn execute(&self, seed: AdminSeed) -> Result<BootstrapOutcome, BootstrapAdminError>;
}
