use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::content::application::domain::content_item::{
    ContentItem, ListFilter, Record,
};
use crate::modules::content::application::domain::ordering::sort_for_display;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError, ContentSources,
};

/// Empty in-memory repositories for every kind.
pub fn in_memory_sources() -> ContentSources {
    ContentSources {
        header_titles: Arc::new(InMemoryContentRepository::new()),
        hero_sections: Arc::new(InMemoryContentRepository::new()),
        quotes: Arc::new(InMemoryContentRepository::new()),
        about_sections: Arc::new(InMemoryContentRepository::new()),
        timeline_items: Arc::new(InMemoryContentRepository::new()),
        skills: Arc::new(InMemoryContentRepository::new()),
        certificates: Arc::new(InMemoryContentRepository::new()),
        projects: Arc::new(InMemoryContentRepository::new()),
        project_images: Arc::new(InMemoryContentRepository::new()),
        contact_info: Arc::new(InMemoryContentRepository::new()),
        social_links: Arc::new(InMemoryContentRepository::new()),
    }
}

/// Content store held in memory, with the same single-active, singleton and
/// ordering rules as the database adapter.
pub struct InMemoryContentRepository<T: ContentItem> {
    records: Mutex<Vec<Record<T>>>,
    last_created: Mutex<Option<DateTime<Utc>>>,
    failure: Option<ContentRepositoryError>,
}

impl<T: ContentItem> Default for InMemoryContentRepository<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            last_created: Mutex::new(None),
            failure: None,
        }
    }
}

impl<T: ContentItem> InMemoryContentRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record<T>>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Every call fails with `err`.
    pub fn fail_with(mut self, err: ContentRepositoryError) -> Self {
        self.failure = Some(err);
        self
    }

    pub fn snapshot(&self) -> Vec<Record<T>> {
        self.records.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ContentRepositoryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    // Strictly increasing, so creation order is unambiguous.
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

    fn deactivate_others(records: &mut [Record<T>], keep: Uuid) {
        for record in records.iter_mut().filter(|r| r.id != keep) {
            record.item.set_active(false);
        }
    }
}

#[async_trait]
impl<T: ContentItem> ContentRepository<T> for InMemoryContentRepository<T> {
    async fn list(&self, filter: ListFilter) -> Result<Vec<Record<T>>, ContentRepositoryError> {
        self.check()?;

        let mut out: Vec<Record<T>> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.is_active.map_or(true, |a| r.item.is_active() == a))
            .filter(|r| filter.parent_id.is_none() || r.item.parent_id() == filter.parent_id)
            .cloned()
            .collect();

        sort_for_display(&mut out);
        Ok(out)
    }

    async fn get(&self, id: Uuid) -> Result<Record<T>, ContentRepositoryError> {
        self.check()?;

        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, item: T) -> Result<Record<T>, ContentRepositoryError> {
        self.check()?;

        let created_at = self.next_created_at();
        let mut records = self.records.lock().unwrap();
        if T::SINGLETON && !records.is_empty() {
            return Err(ContentRepositoryError::SingletonExists);
        }

        let record = Record::new(Uuid::new_v4(), created_at, item);
        if T::SINGLE_ACTIVE && record.item.is_active() {
            Self::deactivate_others(&mut records, record.id);
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, item: T) -> Result<Record<T>, ContentRepositoryError> {
        self.check()?;

        let mut records = self.records.lock().unwrap();
        if !records.iter().any(|r| r.id == id) {
            return Err(ContentRepositoryError::NotFound);
        }
        if T::SINGLE_ACTIVE && item.is_active() {
            Self::deactivate_others(&mut records, id);
        }

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ContentRepositoryError::NotFound)?;
        record.item = item;
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.check()?;

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_active(
        &self,
        ids: &[Uuid],
        active: bool,
    ) -> Result<u64, ContentRepositoryError> {
        self.check()?;

        let mut records = self.records.lock().unwrap();
        if T::SINGLE_ACTIVE && active {
            if let [only] = ids {
                Self::deactivate_others(&mut records, *only);
            }
        }

        let mut changed = 0;
        for record in records.iter_mut().filter(|r| ids.contains(&r.id)) {
            record.item.set_active(active);
            changed += 1;
        }
        Ok(changed)
    }
}
