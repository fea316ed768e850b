use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::tag::entity::{NewTag, Tag, TagFilter, TagUpdate};
use crate::domain::tag::value_objects::TagId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage contract for tags. Every lookup ignores soft-deleted rows.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn exists_by_id(&self, id: TagId) -> DomainResult<bool>;
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool>;
    async fn count(&self, filter: &TagFilter) -> DomainResult<u64>;
    async fn list_page(&self, filter: &TagFilter, page: PageRequest) -> DomainResult<Vec<Tag>>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(&self, update: TagUpdate) -> DomainResult<Tag>;
    async fn soft_delete(&self, id: TagId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}
