// src/infrastructure/repositories/postgres_tag.rs
use super::{error::to_count, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::tag::{NewTag, Tag, TagFilter, TagId, TagRepository, TagState, TagUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const TAG_COLUMNS: &str =
    "id, name, state, created_by, modified_by, created_at, modified_at, deleted_at";

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &TagFilter) {
        builder.push(" WHERE deleted_at IS NULL");

        if let Some(name) = &filter.name {
            builder.push(" AND name = ");
            builder.push_bind(name.clone());
        }

        if let Some(state) = filter.state {
            builder.push(" AND state = ");
            builder.push_bind(i16::from(state));
        }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    state: i16,
    created_by: String,
    modified_by: Option<String>,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: row.name,
            state: TagState::try_from(row.state)?,
            created_by: row.created_by,
            modified_by: row.modified_by,
            created_at: row.created_at,
            modified_at: row.modified_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn exists_by_id(&self, id: TagId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM blog_tag WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(i64::from(id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM blog_tag WHERE name = $1 AND deleted_at IS NULL)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn count(&self, filter: &TagFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM blog_tag");
        Self::push_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(to_count(total))
    }

    async fn list_page(&self, filter: &TagFilter, page: PageRequest) -> DomainResult<Vec<Tag>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {TAG_COLUMNS} FROM blog_tag"));
        Self::push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<TagRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM blog_tag WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let NewTag {
            name,
            state,
            created_by,
            created_at,
            modified_at,
        } = tag;

        let row = sqlx::query_as::<_, TagRow>(&format!(
            "INSERT INTO blog_tag (name, state, created_by, created_at, modified_at)
             VALUES ($1, $2, $3, COALESCE($4, now()), COALESCE($5, now()))
             RETURNING {TAG_COLUMNS}"
        ))
        .bind(name)
        .bind(i16::from(state))
        .bind(created_by)
        .bind(created_at)
        .bind(modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let TagUpdate {
            id,
            name,
            state,
            modified_by,
            modified_at,
        } = update;

        let row = sqlx::query_as::<_, TagRow>(&format!(
            "UPDATE blog_tag
             SET name = $1, state = $2, modified_by = $3, modified_at = COALESCE($4, now())
             WHERE id = $5 AND deleted_at IS NULL
             RETURNING {TAG_COLUMNS}"
        ))
        .bind(name)
        .bind(i16::from(state))
        .bind(modified_by)
        .bind(modified_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("tag {id}")))?;

        Tag::try_from(row)
    }

    async fn soft_delete(&self, id: TagId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE blog_tag SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL")
                .bind(deleted_at)
                .bind(i64::from(id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("tag {id}")));
        }
        Ok(())
    }
}
