use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::domain::content_item::{
    ContentItem, ListFilter, ListingPatch, Record,
};
use crate::modules::content::application::domain::entities::MAX_STORED_INT;
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageContentError, ManageContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError, ContentSources,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ManageContentService<T>
where
    T: ContentItem,
{
    repository: Arc<dyn ContentRepository<T>>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> ManageContentService<T>
where
    T: ContentItem,
{
    pub fn new(repository: Arc<dyn ContentRepository<T>>) -> Self {
        Self {
            repository,
            _kind: PhantomData,
        }
    }

    fn check_listing_patch(patch: &ListingPatch) -> Result<(), ManageContentError> {
        if patch.is_empty() {
            return Err(ManageContentError::invalid(
                "non_field_errors",
                "empty",
                "Provide display_order or is_active.",
            ));
        }
        if let Some(order) = patch.display_order {
            if !T::KIND.is_ordered() {
                return Err(ManageContentError::invalid(
                    "display_order",
                    "unsupported",
                    "This kind has no display order.",
                ));
            }
            if order > MAX_STORED_INT {
                return Err(ManageContentError::invalid(
                    "display_order",
                    "max_value",
                    &format!("Ensure this value is less than or equal to {MAX_STORED_INT}."),
                ));
            }
        }
        if patch.is_active.is_some() && !T::KIND.has_active_flag() {
            return Err(ManageContentError::invalid(
                "is_active",
                "unsupported",
                "This kind has no active flag.",
            ));
        }
        Ok(())
    }
}

fn map_repo_err(err: ContentRepositoryError) -> ManageContentError {
    match err {
        ContentRepositoryError::NotFound => ManageContentError::NotFound,
        ContentRepositoryError::SingletonExists => ManageContentError::SingletonExists,
        ContentRepositoryError::ParentNotFound => ManageContentError::invalid(
            "project_id",
            "invalid_choice",
            "Select a valid choice. That choice is not one of the available choices.",
        ),
        ContentRepositoryError::Conflict(msg) => ManageContentError::Conflict(msg),
        ContentRepositoryError::DatabaseError(msg) => ManageContentError::RepositoryError(msg),
    }
}

#[async_trait]
impl<T> ManageContentUseCase<T> for ManageContentService<T>
where
    T: ContentItem,
{
    async fn list(&self, filter: ListFilter) -> Result<Vec<Record<T>>, ManageContentError> {
        if filter.is_active.is_some() && !T::KIND.has_active_flag() {
            return Err(ManageContentError::invalid(
                "active",
                "unsupported",
                "This kind has no active flag.",
            ));
        }

        self.repository.list(filter).await.map_err(map_repo_err)
    }

    async fn get(&self, id: Uuid) -> Result<Record<T>, ManageContentError> {
        self.repository.get(id).await.map_err(map_repo_err)
    }

    async fn create(&self, item: T) -> Result<Record<T>, ManageContentError> {
        item.validate().map_err(ManageContentError::Validation)?;

        let record = self.repository.create(item).await.map_err(map_repo_err)?;

        tracing::info!(kind = %T::KIND, id = %record.id, "content record created");
        Ok(record)
    }

    async fn update(&self, id: Uuid, item: T) -> Result<Record<T>, ManageContentError> {
        item.validate().map_err(ManageContentError::Validation)?;

        self.repository.update(id, item).await.map_err(map_repo_err)
    }

    async fn patch_listing(
        &self,
        id: Uuid,
        patch: ListingPatch,
    ) -> Result<Record<T>, ManageContentError> {
        Self::check_listing_patch(&patch)?;

        let mut current = self.repository.get(id).await.map_err(map_repo_err)?;
        patch.apply(&mut current.item);

        self.repository
            .update(id, current.item)
            .await
            .map_err(map_repo_err)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ManageContentError> {
        self.repository.delete(id).await.map_err(map_repo_err)?;

        tracing::info!(kind = %T::KIND, id = %id, "content record deleted");
        Ok(())
    }

    async fn bulk_set_active(
        &self,
        mut ids: Vec<Uuid>,
        active: bool,
    ) -> Result<u64, ManageContentError> {
        if !T::KIND.has_active_flag() {
            return Err(ManageContentError::invalid(
                "is_active",
                "unsupported",
                "This kind has no active flag.",
            ));
        }

        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Err(ManageContentError::invalid(
                "ids",
                "required",
                "Select at least one record.",
            ));
        }

        if T::SINGLE_ACTIVE && active && ids.len() > 1 {
            return Err(ManageContentError::invalid(
                "ids",
                "single_active",
                &format!(
                    "Only one {} can be active at a time.",
                    T::KIND.label().to_lowercase()
                ),
            ));
        }

        self.repository
            .set_active(&ids, active)
            .await
            .map_err(map_repo_err)
    }
}

//
// ──────────────────────────────────────────────────────────
// Wiring
// ──────────────────────────────────────────────────────────
//

impl ContentUseCases {
    pub fn from_sources(sources: &ContentSources) -> Self {
        Self {
            header_titles: Arc::new(ManageContentService::new(sources.header_titles.clone())),
            hero_sections: Arc::new(ManageContentService::new(sources.hero_sections.clone())),
            quotes: Arc::new(ManageContentService::new(sources.quotes.clone())),
            about_sections: Arc::new(ManageContentService::new(sources.about_sections.clone())),
            timeline_items: Arc::new(ManageContentService::new(sources.timeline_items.clone())),
            skills: Arc::new(ManageContentService::new(sources.skills.clone())),
            certificates: Arc::new(ManageContentService::new(sources.certificates.clone())),
            projects: Arc::new(ManageContentService::new(sources.projects.clone())),
            project_images: Arc::new(ManageContentService::new(sources.project_images.clone())),
            contact_info: Arc::new(ManageContentService::new(sources.contact_info.clone())),
            social_links: Arc::new(ManageContentService::new(sources.social_links.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::modules::content::application::domain::entities::{
        ContactInfo, HeroSection, ProjectImage, Quote, SocialLink,
    };
    use crate::tests::support::in_memory_content::InMemoryContentRepository;

    fn hero(title: &str, active: bool) -> HeroSection {
        HeroSection {
            title: title.to_string(),
            subtitle: "Backend engineer".to_string(),
            image: None,
            projects_count: 42,
            clients_count: 28,
            experience_count: 5,
            is_active: active,
        }
    }

    fn quote(text: &str, order: u32) -> Quote {
        Quote {
            text: text.to_string(),
            display_order: order,
            is_active: true,
        }
    }

    fn service<T: ContentItem>(
        repo: Arc<InMemoryContentRepository<T>>,
    ) -> ManageContentService<T> {
        ManageContentService::new(repo)
    }

    // =====================================================
    // Create / update
    // =====================================================

    #[tokio::test]
    async fn test_create_rejects_invalid_item() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo.clone());

        let err = svc.create(quote("   ", 0)).await.unwrap_err();

        match err {
            ManageContentError::Validation(errors) => assert!(errors.contains("text")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_creating_active_hero_deactivates_previous() {
        let repo = Arc::new(InMemoryContentRepository::<HeroSection>::new());
        let svc = service(repo.clone());

        let a = svc.create(hero("A", true)).await.unwrap();
        let b = svc.create(hero("B", true)).await.unwrap();

        let active = svc.list(ListFilter::active()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b.id);

        let a_now = svc.get(a.id).await.unwrap();
        assert!(!a_now.item.is_active);
    }

    #[tokio::test]
    async fn test_saving_inactive_hero_leaves_others_alone() {
        let repo = Arc::new(InMemoryContentRepository::<HeroSection>::new());
        let svc = service(repo.clone());

        let a = svc.create(hero("A", true)).await.unwrap();
        svc.create(hero("B", false)).await.unwrap();

        let active = svc.list(ListFilter::active()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, a.id);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);

        let err = svc.update(Uuid::new_v4(), quote("x", 0)).await.unwrap_err();
        assert_eq!(err, ManageContentError::NotFound);
    }

    #[tokio::test]
    async fn test_second_contact_info_is_rejected() {
        let repo = Arc::new(InMemoryContentRepository::<ContactInfo>::new());
        let svc = service(repo);
        let info = ContactInfo {
            title: "Get In Touch".to_string(),
            description: "Say hi".to_string(),
            email: "me@example.com".to_string(),
            address: "Lucknow".to_string(),
        };

        svc.create(info.clone()).await.unwrap();
        let err = svc.create(info).await.unwrap_err();

        assert_eq!(err, ManageContentError::SingletonExists);
    }

    #[tokio::test]
    async fn test_image_for_unknown_project_is_field_error() {
        let repo = Arc::new(
            InMemoryContentRepository::<ProjectImage>::new()
                .fail_with(ContentRepositoryError::ParentNotFound),
        );
        let svc = service(repo);

        let err = svc
            .create(ProjectImage {
                project_id: Uuid::new_v4(),
                image: "projects/a.webp".to_string(),
                alt_text: "Screenshot".to_string(),
                display_order: 0,
            })
            .await
            .unwrap_err();

        match err {
            ManageContentError::Validation(errors) => assert!(errors.contains("project_id")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_database_error_maps_to_repository_error() {
        let repo = Arc::new(
            InMemoryContentRepository::<Quote>::new()
                .fail_with(ContentRepositoryError::DatabaseError("db down".to_string())),
        );
        let svc = service(repo);

        let err = svc.list(ListFilter::all()).await.unwrap_err();
        assert!(matches!(err, ManageContentError::RepositoryError(msg) if msg == "db down"));
    }

    // =====================================================
    // Listing
    // =====================================================

    #[tokio::test]
    async fn test_list_active_is_ordered() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);

        svc.create(quote("third", 5)).await.unwrap();
        svc.create(quote("first", 1)).await.unwrap();
        let mut hidden = quote("hidden", 0);
        hidden.is_active = false;
        svc.create(hidden).await.unwrap();
        svc.create(quote("second", 1)).await.unwrap();

        let texts: Vec<String> = svc
            .list(ListFilter::active())
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.item.text)
            .collect();

        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_active_filter_on_flagless_kind_is_rejected() {
        let repo = Arc::new(InMemoryContentRepository::<ContactInfo>::new());
        let svc = service(repo);

        let err = svc.list(ListFilter::active()).await.unwrap_err();
        assert!(matches!(err, ManageContentError::Validation(_)));
    }

    // =====================================================
    // Inline edits
    // =====================================================

    #[tokio::test]
    async fn test_patch_listing_updates_order() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);
        let created = svc.create(quote("q", 0)).await.unwrap();

        let patched = svc
            .patch_listing(
                created.id,
                ListingPatch {
                    display_order: Some(7),
                    is_active: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.item.display_order, 7);
        assert_eq!(patched.item.text, "q");
        assert_eq!(patched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_patch_listing_activation_is_single_active() {
        let repo = Arc::new(InMemoryContentRepository::<HeroSection>::new());
        let svc = service(repo);
        let a = svc.create(hero("A", true)).await.unwrap();
        let b = svc.create(hero("B", false)).await.unwrap();

        svc.patch_listing(
            b.id,
            ListingPatch {
                display_order: None,
                is_active: Some(true),
            },
        )
        .await
        .unwrap();

        let active = svc.list(ListFilter::active()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b.id);
        assert!(!svc.get(a.id).await.unwrap().item.is_active);
    }

    #[tokio::test]
    async fn test_patch_listing_rejects_order_on_unordered_kind() {
        let repo = Arc::new(InMemoryContentRepository::<SocialLink>::new());
        let svc = service(repo);

        let err = svc
            .patch_listing(
                Uuid::new_v4(),
                ListingPatch {
                    display_order: Some(1),
                    is_active: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ManageContentError::Validation(e) if e.contains("display_order")));
    }

    #[tokio::test]
    async fn test_patch_listing_rejects_empty_patch() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);

        let err = svc
            .patch_listing(Uuid::new_v4(), ListingPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ManageContentError::Validation(_)));
    }

    // =====================================================
    // Bulk activation
    // =====================================================

    #[tokio::test]
    async fn test_bulk_deactivate_quotes() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);
        let a = svc.create(quote("a", 0)).await.unwrap();
        let b = svc.create(quote("b", 1)).await.unwrap();

        let changed = svc
            .bulk_set_active(vec![a.id, b.id, a.id], false)
            .await
            .unwrap();

        assert_eq!(changed, 2);
        assert!(svc.list(ListFilter::active()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_activate_many_single_active_is_rejected() {
        let repo = Arc::new(InMemoryContentRepository::<HeroSection>::new());
        let svc = service(repo);
        let a = svc.create(hero("A", false)).await.unwrap();
        let b = svc.create(hero("B", false)).await.unwrap();

        let err = svc
            .bulk_set_active(vec![a.id, b.id], true)
            .await
            .unwrap_err();

        match err {
            ManageContentError::Validation(errors) => assert_eq!(
                errors.messages("ids"),
                vec!["Only one hero section can be active at a time."]
            ),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bulk_activate_one_single_active_deactivates_rest() {
        let repo = Arc::new(InMemoryContentRepository::<HeroSection>::new());
        let svc = service(repo);
        svc.create(hero("A", true)).await.unwrap();
        let b = svc.create(hero("B", false)).await.unwrap();

        svc.bulk_set_active(vec![b.id], true).await.unwrap();

        let active = svc.list(ListFilter::active()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b.id);
    }

    #[tokio::test]
    async fn test_bulk_requires_ids() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);

        let err = svc.bulk_set_active(vec![], true).await.unwrap_err();
        assert!(matches!(err, ManageContentError::Validation(e) if e.contains("ids")));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);

        let err = svc.delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, ManageContentError::NotFound);
    }

    #[tokio::test]
    async fn test_created_record_has_timestamp() {
        let repo = Arc::new(InMemoryContentRepository::<Quote>::new());
        let svc = service(repo);
        let before = Utc::now();

        let record = svc.create(quote("q", 0)).await.unwrap();

        assert!(record.created_at >= before);
    }
}
