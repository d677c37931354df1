use async_trait::async_trait;
use futures::try_join;
use std::sync::Arc;

use crate::modules::content::application::domain::content_item::ListFilter;
use crate::modules::content::application::domain::ordering::attach_images;
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, ContentSources,
};
use crate::modules::resume::application::domain::resume::{ResumeContext, ResumeDocument};
use crate::modules::resume::application::ports::incoming::use_cases::{
    ExportResumeError, ExportResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::ResumeRenderer;

pub struct ExportResumeService {
    sources: ContentSources,
    renderer: Arc<dyn ResumeRenderer>,
}

impl ExportResumeService {
    pub fn new(sources: ContentSources, renderer: Arc<dyn ResumeRenderer>) -> Self {
        Self { sources, renderer }
    }

    async fn context(&self) -> Result<ResumeContext, ContentRepositoryError> {
        let s = &self.sources;
        let active = ListFilter::active();

        let (
            hero_sections,
            header_titles,
            about_sections,
            timeline_items,
            skills,
            certificates,
            projects,
            images,
            quotes,
            contact_info,
            social_links,
        ) = try_join!(
            s.hero_sections.list(active),
            s.header_titles.list(active),
            s.about_sections.list(active),
            s.timeline_items.list(active),
            s.skills.list(active),
            s.certificates.list(active),
            s.projects.list(active),
            s.project_images.list(ListFilter::all()),
            s.quotes.list(active),
            s.contact_info.list(ListFilter::all()),
            s.social_links.list(active),
        )?;

        Ok(ResumeContext {
            hero_sections,
            header_titles,
            about_sections,
            timeline_items,
            skills,
            certificates,
            projects: attach_images(projects, images),
            quotes,
            contact_info,
            social_links,
        })
    }
}

#[async_trait]
impl ExportResumeUseCase for ExportResumeService {
    async fn execute(&self) -> Result<ResumeDocument, ExportResumeError> {
        let context = self
            .context()
            .await
            .map_err(|e| ExportResumeError::RepositoryError(e.to_string()))?;

        let bytes = self.renderer.render(&context).await?;

        tracing::info!(bytes = bytes.len(), "Resume rendered");
        Ok(ResumeDocument::pdf(bytes))
    }
}
