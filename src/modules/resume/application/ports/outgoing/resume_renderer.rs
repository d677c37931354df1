use async_trait::async_trait;

use crate::modules::resume::application::domain::resume::ResumeContext;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeRenderError {
    #[error("Browser unavailable: {0}")]
    BrowserUnavailable(String),

    #[error("PDF conversion failed: {0}")]
    Conversion(String),

    #[error("Render task failed: {0}")]
    TaskFailed(String),
}

/// Turns a resume context into PDF bytes.
#[async_trait]
pub trait ResumeRenderer: Send + Sync {
    async fn render(&self, context: &ResumeContext) -> Result<Vec<u8>, ResumeRenderError>;
}
