// tests/support/mocks/articles.rs
use async_trait::async_trait;
use blog_service::domain::{
    article::{Article, ArticleFilter, ArticleId, ArticleRepository, ArticleUpdate, NewArticle},
    errors::{DomainError, DomainResult},
    pagination::PageRequest,
};
use chrono::{DateTime, Utc};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Debug, Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<Vec<Article>>,
    calls: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn all_rows(&self) -> Vec<Article> {
        self.rows.lock().unwrap().clone()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn matching(&self, filter: &ArticleFilter) -> Vec<Article> {
        let mut rows: Vec<Article> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.deleted_at.is_none())
            .filter(|a| filter.state.is_none_or(|state| a.state == state))
            .filter(|a| filter.tag_id.is_none_or(|tag_id| a.tag_id == tag_id))
            .filter(|a| {
                filter
                    .created_by
                    .as_ref()
                    .is_none_or(|author| &a.created_by == author)
            })
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
impl ArticleRepository for InMemoryArticleRepo {
    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool> {
        self.touch();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.id == id && a.deleted_at.is_none()))
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        self.touch();
        Ok(self.matching(filter).len() as u64)
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        self.touch();
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.touch();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id && a.deleted_at.is_none())
            .cloned())
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let created_at = article.created_at.unwrap_or_else(Utc::now);
        let created = Article {
            id: ArticleId::new(rows.len() as i64 + 1)?,
            tag_id: article.tag_id,
            title: article.title,
            description: article.description,
            content: article.content,
            state: article.state,
            created_by: article.created_by,
            modified_by: None,
            created_at,
            modified_at: article.modified_at.unwrap_or(created_at),
            deleted_at: None,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .iter_mut()
            .find(|a| a.id == update.id && a.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound(format!("article {}", update.id)))?;
        article.tag_id = update.tag_id;
        article.title = update.title;
        article.description = update.description;
        article.content = update.content;
        article.state = update.state;
        article.modified_by = Some(update.modified_by);
        article.modified_at = update.modified_at.unwrap_or_else(Utc::now);
        Ok(article.clone())
    }

    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .iter_mut()
            .find(|a| a.id == id && a.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound(format!("article {id}")))?;
        article.deleted_at = Some(deleted_at);
        Ok(())
    }
}
