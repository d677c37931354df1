use async_trait::async_trait;

use crate::modules::home::application::domain::page::HomePage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssembleHomePageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Builds the visitor-facing view of the active content.
#[async_trait]
pub trait AssembleHomePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePage, AssembleHomePageError>;
}
