use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::application::domain::content_item::{
    ContentItem, ListFilter, Record,
};
use crate::modules::content::application::domain::entities::{
    AboutSection, Certificate, ContactInfo, HeaderTitle, HeroSection, Project, ProjectImage,
    Quote, SocialLink, Skill, TimelineItem,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("A record of this kind already exists")]
    SingletonExists,

    #[error("Owning record not found")]
    ParentNotFound,

    #[error("Constraint violation: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Repository port
// ──────────────────────────────────────────────────────────
//

/// Storage for one content kind.
///
/// Writes of single-active kinds (`T::SINGLE_ACTIVE`) that leave the record
/// active deactivate every other record of the kind in the same transaction.
#[async_trait]
pub trait ContentRepository<T: ContentItem>: Send + Sync {
    /// Records matching `filter`, in display order.
    async fn list(&self, filter: ListFilter) -> Result<Vec<Record<T>>, ContentRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<Record<T>, ContentRepositoryError>;

    async fn create(&self, item: T) -> Result<Record<T>, ContentRepositoryError>;

    /// Replaces every field; `id` and `created_at` are kept.
    async fn update(&self, id: Uuid, item: T) -> Result<Record<T>, ContentRepositoryError>;

    /// Deletes the record and anything it owns.
    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError>;

    /// Sets `is_active` on every listed record; returns how many changed.
    async fn set_active(&self, ids: &[Uuid], active: bool)
        -> Result<u64, ContentRepositoryError>;
}

/// One repository per content kind, for the read side.
#[derive(Clone)]
pub struct ContentSources {
    pub header_titles: Arc<dyn ContentRepository<HeaderTitle>>,
    pub hero_sections: Arc<dyn ContentRepository<HeroSection>>,
    pub quotes: Arc<dyn ContentRepository<Quote>>,
    pub about_sections: Arc<dyn ContentRepository<AboutSection>>,
    pub timeline_items: Arc<dyn ContentRepository<TimelineItem>>,
    pub skills: Arc<dyn ContentRepository<Skill>>,
    pub certificates: Arc<dyn ContentRepository<Certificate>>,
    pub projects: Arc<dyn ContentRepository<Project>>,
    pub project_images: Arc<dyn ContentRepository<ProjectImage>>,
    pub contact_info: Arc<dyn ContentRepository<ContactInfo>>,
    pub social_links: Arc<dyn ContentRepository<SocialLink>>,
}
