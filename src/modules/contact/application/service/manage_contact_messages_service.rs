use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactMessage, MessageFilter};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ManageContactMessagesUseCase, ManageMessagesError,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::shared::validation::FieldErrors;

pub struct ManageContactMessagesService {
    repository: Arc<dyn ContactMessageRepository>,
}

impl ManageContactMessagesService {
    pub fn new(repository: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repository }
    }
}

fn map_repo_err(err: ContactMessageRepositoryError) -> ManageMessagesError {
    match err {
        ContactMessageRepositoryError::NotFound => ManageMessagesError::NotFound,
        ContactMessageRepositoryError::DatabaseError(msg) => {
            ManageMessagesError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl ManageContactMessagesUseCase for ManageContactMessagesService {
    async fn list(&self, filter: MessageFilter) -> Result<Vec<ContactMessage>, ManageMessagesError> {
        self.repository.list(filter).await.map_err(map_repo_err)
    }

    async fn get(&self, id: Uuid) -> Result<ContactMessage, ManageMessagesError> {
        self.repository.get(id).await.map_err(map_repo_err)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ManageMessagesError> {
        self.repository.delete(id).await.map_err(map_repo_err)?;

        tracing::info!(message_id = %id, "Contact message deleted");
        Ok(())
    }

    async fn mark(&self, mut ids: Vec<Uuid>, read: bool) -> Result<u64, ManageMessagesError> {
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            let mut errors = FieldErrors::new();
            errors.add("ids", "required", "Select at least one message.");
            return Err(ManageMessagesError::Validation(errors));
        }

        self.repository
            .set_read(&ids, read)
            .await
            .map_err(map_repo_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_messages::InMemoryMessageRepository;
    use crate::modules::contact::application::domain::entities::ContactSubmission;

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    async fn seeded(names: &[&str]) -> (Arc<InMemoryMessageRepository>, Vec<ContactMessage>) {
        let repo = Arc::new(InMemoryMessageRepository::default());
        let mut stored = Vec::new();
        for name in names {
            stored.push(repo.create(submission(name)).await.unwrap());
        }
        (repo, stored)
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (repo, _) = seeded(&["first", "second", "third"]).await;
        let service = ManageContactMessagesService::new(repo);

        let names: Vec<String> = service
            .list(MessageFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();

        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_mark_read_then_filter() {
        let (repo, stored) = seeded(&["a", "b", "c"]).await;
        let service = ManageContactMessagesService::new(repo);

        let changed = service
            .mark(vec![stored[0].id, stored[1].id, stored[0].id], true)
            .await
            .unwrap();
        assert_eq!(changed, 2);

        let unread = service
            .list(MessageFilter {
                is_read: Some(false),
            })
            .await
            .unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].name, "c");

        service.mark(vec![stored[0].id], false).await.unwrap();
        assert!(!service.get(stored[0].id).await.unwrap().is_read);
    }

    #[tokio::test]
    async fn test_mark_without_ids_is_rejected() {
        let (repo, _) = seeded(&[]).await;
        let service = ManageContactMessagesService::new(repo);

        assert!(matches!(
            service.mark(Vec::new(), true).await,
            Err(ManageMessagesError::Validation(errors)) if errors.contains("ids")
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (repo, stored) = seeded(&["a"]).await;
        let service = ManageContactMessagesService::new(repo);

        service.delete(stored[0].id).await.unwrap();

        assert_eq!(
            service.delete(stored[0].id).await,
            Err(ManageMessagesError::NotFound)
        );
        assert_eq!(
            service.get(stored[0].id).await,
            Err(ManageMessagesError::NotFound)
        );
    }
}
