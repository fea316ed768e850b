// tests/support/mocks/tags.rs
use async_trait::async_trait;
use blog_service::domain::{
    errors::{DomainError, DomainResult},
    pagination::PageRequest,
    tag::{NewTag, Tag, TagFilter, TagId, TagRepository, TagUpdate},
};
use chrono::{DateTime, Utc};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Keeps soft-deleted rows so tests can see they were retained.
#[derive(Debug, Default)]
pub struct InMemoryTagRepo {
    rows: Mutex<Vec<Tag>>,
    calls: AtomicUsize,
}

impl InMemoryTagRepo {
    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn all_rows(&self) -> Vec<Tag> {
        self.rows.lock().unwrap().clone()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn matching(&self, filter: &TagFilter) -> Vec<Tag> {
        let mut rows: Vec<Tag> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|tag| !tag.is_deleted())
            .filter(|tag| filter.name.as_ref().is_none_or(|name| &tag.name == name))
            .filter(|tag| filter.state.is_none_or(|state| tag.state == state))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        rows
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn exists_by_id(&self, id: TagId) -> DomainResult<bool> {
        self.touch();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|tag| tag.id == id && !tag.is_deleted()))
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        self.touch();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|tag| tag.name == name && !tag.is_deleted()))
    }

    async fn count(&self, filter: &TagFilter) -> DomainResult<u64> {
        self.touch();
        Ok(self.matching(filter).len() as u64)
    }

    async fn list_page(&self, filter: &TagFilter, page: PageRequest) -> DomainResult<Vec<Tag>> {
        self.touch();
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        self.touch();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|tag| tag.id == id && !tag.is_deleted())
            .cloned())
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let created_at = tag.created_at.unwrap_or_else(Utc::now);
        let created = Tag {
            id: TagId::new(rows.len() as i64 + 1)?,
            name: tag.name,
            state: tag.state,
            created_by: tag.created_by,
            modified_by: None,
            created_at,
            modified_at: tag.modified_at.unwrap_or(created_at),
            deleted_at: None,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let tag = rows
            .iter_mut()
            .find(|tag| tag.id == update.id && !tag.is_deleted())
            .ok_or_else(|| DomainError::NotFound(format!("tag {}", update.id)))?;
        tag.name = update.name;
        tag.state = update.state;
        tag.modified_by = Some(update.modified_by);
        tag.modified_at = update.modified_at.unwrap_or_else(Utc::now);
        Ok(tag.clone())
    }

    async fn soft_delete(&self, id: TagId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let tag = rows
            .iter_mut()
            .find(|tag| tag.id == id && !tag.is_deleted())
            .ok_or_else(|| DomainError::NotFound(format!("tag {id}")))?;
        tag.deleted_at = Some(deleted_at);
        Ok(())
    }
}
