// tests/support/mocks/failing.rs
use async_trait::async_trait;
use blog_service::domain::{
    article::{Article, ArticleFilter, ArticleId, ArticleRepository, ArticleUpdate, NewArticle},
    errors::{DomainError, DomainResult},
    pagination::PageRequest,
    tag::{NewTag, Tag, TagFilter, TagId, TagRepository, TagUpdate},
};
use chrono::{DateTime, Utc};

/// Every call fails as if the database connection dropped.
#[derive(Debug, Default, Clone)]
pub struct FailingRepo;

fn down<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl TagRepository for FailingRepo {
    async fn exists_by_id(&self, _id: TagId) -> DomainResult<bool> {
        down()
    }

    async fn exists_by_name(&self, _name: &str) -> DomainResult<bool> {
        down()
    }

    async fn count(&self, _filter: &TagFilter) -> DomainResult<u64> {
        down()
    }

    async fn list_page(&self, _filter: &TagFilter, _page: PageRequest) -> DomainResult<Vec<Tag>> {
        down()
    }

    async fn find_by_id(&self, _id: TagId) -> DomainResult<Option<Tag>> {
        down()
    }

    async fn insert(&self, _tag: NewTag) -> DomainResult<Tag> {
        down()
    }

    async fn update(&self, _update: TagUpdate) -> DomainResult<Tag> {
        down()
    }

    async fn soft_delete(&self, _id: TagId, _deleted_at: DateTime<Utc>) -> DomainResult<()> {
        down()
    }
}

#[async_trait]
impl ArticleRepository for FailingRepo {
    async fn exists_by_id(&self, _id: ArticleId) -> DomainResult<bool> {
        down()
    }

    async fn count(&self, _filter: &ArticleFilter) -> DomainResult<u64> {
        down()
    }

    async fn list_page(
        &self,
        _filter: &ArticleFilter,
        _page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        down()
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        down()
    }

    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        down()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        down()
    }

    async fn soft_delete(&self, _id: ArticleId, _deleted_at: DateTime<Utc>) -> DomainResult<()> {
        down()
    }
}
