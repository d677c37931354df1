use async_trait::async_trait;

use crate::auth::application::domain::entities::{AdminAccount, NewAdminAccount};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AdminRepositoryError>;

    async fn create(&self, account: NewAdminAccount) -> Result<AdminAccount, AdminRepositoryError>;
}
