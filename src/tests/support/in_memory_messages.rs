use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactSubmission, MessageFilter,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

/// Message store held in memory, newest first on listing.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Mutex<Vec<ContactMessage>>,
    last_created: Mutex<Option<DateTime<Utc>>>,
    failure: Option<ContactMessageRepositoryError>,
}

impl InMemoryMessageRepository {
    /// Every call fails with `err`.
    pub fn failing(err: ContactMessageRepositoryError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ContactMessageRepositoryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn next_created_at(&self) -> DateTime<Utc> {
        let mut last = self.last_created.lock().unwrap();
        let now = Utc::now();
        let created_at = match *last {
            Some(prev) if prev >= now => prev + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(created_at);
        created_at
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryMessageRepository {
    async fn create(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        self.check()?;
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            is_read: false,
            created_at: self.next_created_at(),
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list(
        &self,
        filter: MessageFilter,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        self.check()?;
        let mut messages: Vec<ContactMessage> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| filter.is_read.map_or(true, |read| m.is_read == read))
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn get(&self, id: Uuid) -> Result<ContactMessage, ContactMessageRepositoryError> {
        self.check()?;
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(ContactMessageRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        self.check()?;
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(ContactMessageRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_read(
        &self,
        ids: &[Uuid],
        read: bool,
    ) -> Result<u64, ContactMessageRepositoryError> {
        self.check()?;
        let mut matched = 0;
        for message in self
            .messages
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|m| ids.contains(&m.id))
        {
            message.is_read = read;
            matched += 1;
        }
        Ok(matched)
    }
}
