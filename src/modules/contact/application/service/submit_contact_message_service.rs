use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::contact::application::domain::entities::{ContactForm, ContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;
use crate::modules::email::application::ports::outgoing::ContactNotifier;

pub struct SubmitContactMessageService {
    repository: Arc<dyn ContactMessageRepository>,
    notifier: Arc<dyn ContactNotifier>,
}

impl SubmitContactMessageService {
    pub fn new(
        repository: Arc<dyn ContactMessageRepository>,
        notifier: Arc<dyn ContactNotifier>,
    ) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for SubmitContactMessageService {
    async fn execute(&self, form: ContactForm) -> Result<ContactMessage, SubmitContactError> {
        let submission = form.validate().map_err(SubmitContactError::Validation)?;

        let message = self
            .repository
            .create(submission)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        tracing::info!(message_id = %message.id, "Contact message stored");

        // The message is received once stored; a lost notification is tolerated.
        if let Err(e) = self.notifier.notify_new_message(&message).await {
            tracing::warn!(message_id = %message.id, "Contact notification failed: {}", e);
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::domain::entities::{
        ContactSubmission, MessageFilter,
    };
    use crate::modules::contact::application::ports::outgoing::ContactMessageRepositoryError;
    use crate::modules::email::application::ports::outgoing::NotificationError;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub MessageRepo {}
        #[async_trait]
        impl ContactMessageRepository for MessageRepo {
            async fn create(&self, submission: ContactSubmission) -> Result<ContactMessage, ContactMessageRepositoryError>;
            async fn list(&self, filter: MessageFilter) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;
            async fn get(&self, id: Uuid) -> Result<ContactMessage, ContactMessageRepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError>;
            async fn set_read(&self, ids: &[Uuid], read: bool) -> Result<u64, ContactMessageRepositoryError>;
        }
    }

    mock! {
        pub Notifier {}
        #[async_trait]
        impl ContactNotifier for Notifier {
            async fn notify_new_message(&self, message: &ContactMessage) -> Result<(), NotificationError>;
        }
    }

    fn form(name: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    fn stored(submission: ContactSubmission) -> ContactMessage {
        ContactMessage {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_valid_form_is_stored_and_notified() {
        let mut repo = MockMessageRepo::new();
        repo.expect_create()
            .withf(|s| s.name == "Ada")
            .times(1)
            .returning(|s| Ok(stored(s)));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_new_message()
            .withf(|m| m.name == "Ada" && !m.is_read)
            .times(1)
            .returning(|_| Ok(()));

        let service = SubmitContactMessageService::new(Arc::new(repo), Arc::new(notifier));
        let message = service.execute(form(" Ada ")).await.unwrap();

        assert_eq!(message.name, "Ada");
        assert!(!message.is_read);
    }

    #[tokio::test]
    async fn test_notification_failure_still_succeeds() {
        let mut repo = MockMessageRepo::new();
        repo.expect_create().times(1).returning(|s| Ok(stored(s)));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_new_message()
            .times(1)
            .returning(|_| Err(NotificationError::EmailSendingFailed("smtp down".to_string())));

        let service = SubmitContactMessageService::new(Arc::new(repo), Arc::new(notifier));

        assert!(service.execute(form("Ada")).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_name_stores_and_notifies_nothing() {
        let mut repo = MockMessageRepo::new();
        repo.expect_create().never();
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_new_message().never();

        let service = SubmitContactMessageService::new(Arc::new(repo), Arc::new(notifier));
        let err = service.execute(form("")).await.unwrap_err();

        match err {
            SubmitContactError::Validation(errors) => assert!(errors.contains("name")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_store_failure_skips_notification() {
        let mut repo = MockMessageRepo::new();
        repo.expect_create().returning(|_| {
            Err(ContactMessageRepositoryError::DatabaseError(
                "disk full".to_string(),
            ))
        });
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_new_message().never();

        let service = SubmitContactMessageService::new(Arc::new(repo), Arc::new(notifier));

        assert!(matches!(
            service.execute(form("Ada")).await,
            Err(SubmitContactError::RepositoryError(msg)) if msg.contains("disk full")
        ));
    }
}
