use crate::domain::article::entity::{Article, ArticleFilter, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}
