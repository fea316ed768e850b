use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub tag_id: i64,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub content: String,
    pub state: i16,
    pub created_by: String,
    pub modified_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            tag_id: article.tag_id.into(),
            title: article.title,
            description: article.description,
            content: article.content,
            state: article.state.into(),
            created_by: article.created_by,
            modified_by: article.modified_by,
            created_at: article.created_at,
            modified_at: article.modified_at,
            deleted_at: article.deleted_at,
        }
    }
}
