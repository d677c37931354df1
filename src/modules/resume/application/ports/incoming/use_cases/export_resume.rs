use async_trait::async_trait;

use crate::modules::resume::application::domain::resume::ResumeDocument;
use crate::modules::resume::application::ports::outgoing::ResumeRenderError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportResumeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error(transparent)]
    Render(#[from] ResumeRenderError),
}

/// Renders the resume from the store as it is right now.
#[async_trait]
pub trait ExportResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumeDocument, ExportResumeError>;
}
