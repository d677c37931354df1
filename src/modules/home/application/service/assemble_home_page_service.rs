use async_trait::async_trait;
use futures::try_join;

use crate::modules::content::application::domain::content_item::ListFilter;
use crate::modules::content::application::domain::ordering::attach_images;
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, ContentSources,
};
use crate::modules::home::application::domain::page::{HomePage, TimelineGroups};
use crate::modules::home::application::ports::incoming::use_cases::{
    AssembleHomePageError, AssembleHomePageUseCase,
};

pub struct AssembleHomePageService {
    sources: ContentSources,
}

impl AssembleHomePageService {
    pub fn new(sources: ContentSources) -> Self {
        Self { sources }
    }
}

impl From<ContentRepositoryError> for AssembleHomePageError {
    fn from(e: ContentRepositoryError) -> Self {
        AssembleHomePageError::RepositoryError(e.to_string())
    }
}

#[async_trait]
impl AssembleHomePageUseCase for AssembleHomePageService {
    async fn execute(&self) -> Result<HomePage, AssembleHomePageError> {
        let s = &self.sources;
        let active = ListFilter::active();

        let (
            header_titles,
            hero_sections,
            quotes,
            about_sections,
            timeline,
            skills,
            certificates,
            projects,
            images,
            contact_info,
            social_links,
        ) = try_join!(
            s.header_titles.list(active),
            s.hero_sections.list(active),
            s.quotes.list(active),
            s.about_sections.list(active),
            s.timeline_items.list(active),
            s.skills.list(active),
            s.certificates.list(active),
            s.projects.list(active),
            s.project_images.list(ListFilter::all()),
            s.contact_info.list(ListFilter::all()),
            s.social_links.list(active),
        )?;

        Ok(HomePage {
            header_title: header_titles.into_iter().next(),
            hero_section: hero_sections.into_iter().next(),
            quotes,
            about_sections,
            timeline: TimelineGroups::partition(timeline),
            skills,
            certificates,
            projects: attach_images(projects, images),
            contact_info: contact_info.into_iter().next(),
            social_links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::modules::content::application::domain::content_item::Record;
    use crate::modules::content::application::domain::entities::{
        HeroSection, Project, ProjectImage, TimelineCategory, TimelineItem,
    };
    use crate::modules::content::application::ports::outgoing::ContentRepository;
    use crate::tests::support::in_memory_content::{in_memory_sources, InMemoryContentRepository};

    fn hero(title: &str) -> HeroSection {
        HeroSection {
            title: title.to_string(),
            subtitle: "Developer".to_string(),
            image: None,
            projects_count: 42,
            clients_count: 28,
            experience_count: 5,
            is_active: true,
        }
    }

    fn timeline(title: &str, category: TimelineCategory, order: u32, active: bool) -> TimelineItem {
        TimelineItem {
            title: title.to_string(),
            period: "2020 - 2022".to_string(),
            description: "d".to_string(),
            category,
            display_order: order,
            is_active: active,
        }
    }

    fn titles(group: &[Record<TimelineItem>]) -> Vec<&str> {
        group.iter().map(|r| r.item.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_store_renders_empty_page() {
        let service = AssembleHomePageService::new(in_memory_sources());

        let page = service.execute().await.unwrap();

        assert_eq!(page, HomePage::default());
    }

    #[tokio::test]
    async fn test_newest_active_hero_is_shown() {
        let sources = in_memory_sources();
        sources.hero_sections.create(hero("A")).await.unwrap();
        sources.hero_sections.create(hero("B")).await.unwrap();

        let page = AssembleHomePageService::new(sources).execute().await.unwrap();

        assert_eq!(page.hero_section.unwrap().item.title, "B");
    }

    #[tokio::test]
    async fn test_timeline_is_grouped_and_ordered() {
        let sources = in_memory_sources();
        let items = [
            timeline("masters", TimelineCategory::Education, 2, true),
            timeline("lead", TimelineCategory::Career, 5, true),
            timeline("bachelor", TimelineCategory::Education, 1, true),
            timeline("hidden", TimelineCategory::Education, 0, false),
            timeline("junior", TimelineCategory::Career, 3, true),
            timeline("founder", TimelineCategory::Future, 9, true),
        ];
        for item in items {
            sources.timeline_items.create(item).await.unwrap();
        }

        let page = AssembleHomePageService::new(sources).execute().await.unwrap();

        assert_eq!(titles(&page.timeline.education), vec!["bachelor", "masters"]);
        assert_eq!(titles(&page.timeline.career), vec!["junior", "lead"]);
        assert_eq!(titles(&page.timeline.future), vec!["founder"]);
    }

    #[tokio::test]
    async fn test_projects_carry_their_images() {
        let sources = in_memory_sources();
        let project = sources
            .projects
            .create(Project {
                title: "Site".to_string(),
                description: "Portfolio".to_string(),
                demo_link: None,
                github_link: None,
                display_order: 0,
                is_active: true,
            })
            .await
            .unwrap();
        for order in [1, 0] {
            sources
                .project_images
                .create(ProjectImage {
                    project_id: project.id,
                    image: format!("projects/{order}.webp"),
                    alt_text: "screenshot".to_string(),
                    display_order: order,
                })
                .await
                .unwrap();
        }

        let page = AssembleHomePageService::new(sources).execute().await.unwrap();

        assert_eq!(page.projects.len(), 1);
        let images: Vec<u32> = page.projects[0]
            .images
            .iter()
            .map(|i| i.item.display_order)
            .collect();
        assert_eq!(images, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let mut sources = in_memory_sources();
        sources.skills = Arc::new(
            InMemoryContentRepository::new()
                .fail_with(ContentRepositoryError::DatabaseError("down".to_string())),
        );

        let result = AssembleHomePageService::new(sources).execute().await;

        assert!(matches!(
            result,
            Err(AssembleHomePageError::RepositoryError(msg)) if msg.contains("down")
        ));
    }
}
