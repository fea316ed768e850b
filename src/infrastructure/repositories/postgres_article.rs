// src/infrastructure/repositories/postgres_article.rs
use super::{error::to_count, map_sqlx};
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleRepository, ArticleState, ArticleUpdate, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::tag::TagId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, tag_id, title, description, content, state, created_by, \
     modified_by, created_at, modified_at, deleted_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE deleted_at IS NULL");

        if let Some(state) = filter.state {
            builder.push(" AND state = ");
            builder.push_bind(i16::from(state));
        }

        if let Some(tag_id) = filter.tag_id {
            builder.push(" AND tag_id = ");
            builder.push_bind(i64::from(tag_id));
        }

        if let Some(created_by) = &filter.created_by {
            builder.push(" AND created_by = ");
            builder.push_bind(created_by.clone());
        }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    tag_id: i64,
    title: String,
    description: String,
    content: String,
    state: i16,
    created_by: String,
    modified_by: Option<String>,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            tag_id: TagId::new(row.tag_id)?,
            title: row.title,
            description: row.description,
            content: row.content,
            state: ArticleState::try_from(row.state)?,
            created_by: row.created_by,
            modified_by: row.modified_by,
            created_at: row.created_at,
            modified_at: row.modified_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM blog_article WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(i64::from(id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM blog_article");
        Self::push_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(to_count(total))
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM blog_article"));
        Self::push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM blog_article WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            tag_id,
            title,
            description,
            content,
            state,
            created_by,
            created_at,
            modified_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO blog_article
                 (tag_id, title, description, content, state, created_by, created_at, modified_at)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, now()), COALESCE($8, now()))
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(tag_id))
        .bind(title)
        .bind(description)
        .bind(content)
        .bind(i16::from(state))
        .bind(created_by)
        .bind(created_at)
        .bind(modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            tag_id,
            title,
            description,
            content,
            state,
            modified_by,
            modified_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE blog_article
             SET tag_id = $1, title = $2, description = $3, content = $4, state = $5,
                 modified_by = $6, modified_at = COALESCE($7, now())
             WHERE id = $8 AND deleted_at IS NULL
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(tag_id))
        .bind(title)
        .bind(description)
        .bind(content)
        .bind(i16::from(state))
        .bind(modified_by)
        .bind(modified_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("article {id}")))?;

        Article::try_from(row)
    }

    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE blog_article SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(deleted_at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id}")));
        }
        Ok(())
    }
}
