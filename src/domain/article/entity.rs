use crate::domain::article::value_objects::{ArticleId, ArticleState};
use crate::domain::tag::TagId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub tag_id: TagId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub state: ArticleState,
    pub created_by: String,
    pub modified_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub tag_id: TagId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub state: ArticleState,
    pub created_by: String,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl NewArticle {
    pub fn stamp(mut self, now: DateTime<Utc>) -> Self {
        self.created_at.get_or_insert(now);
        self.modified_at.get_or_insert(now);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub tag_id: TagId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub state: ArticleState,
    pub modified_by: String,
    pub modified_at: Option<DateTime<Utc>>,
}

impl ArticleUpdate {
    pub fn touch(mut self, now: DateTime<Utc>) -> Self {
        self.modified_at.get_or_insert(now);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub state: Option<ArticleState>,
    pub tag_id: Option<TagId>,
    pub created_by: Option<String>,
}
