use blog_service::domain::{
    article::{Article, ArticleFilter, ArticleRepository, ArticleState, ArticleUpdate, NewArticle},
    errors::DomainError,
    pagination::PageRequest,
    tag::{NewTag, Tag, TagFilter, TagRepository, TagState, TagUpdate},
};
use blog_service::infrastructure::{
    database::{self, PoolLimits},
    repositories::{PostgresArticleRepository, PostgresTagRepository},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;

// Run only when explicitly enabled so the suite does not require Postgres.
async fn integration_pool() -> Option<PgPool> {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return None;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(
        &database_url,
        PoolLimits {
            max_connections: 2,
            min_connections: 0,
        },
    )
    .await
    .expect("init pool");
    database::run_migrations(&pool).await.expect("run migrations");
    Some(pool)
}

/// Per-run author name so rows from parallel or earlier runs never match.
fn marker(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("it-{prefix}-{}-{nanos}", std::process::id())
}

// Whole seconds so the value survives Postgres' microsecond precision.
fn at(minutes: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    base + Duration::minutes(minutes)
}

async fn cleanup(pool: &PgPool, author: &str) {
    sqlx::query("DELETE FROM blog_article WHERE created_by = $1")
        .bind(author)
        .execute(pool)
        .await
        .expect("cleanup articles");
    sqlx::query("DELETE FROM blog_tag WHERE created_by = $1")
        .bind(author)
        .execute(pool)
        .await
        .expect("cleanup tags");
}

async fn insert_tag(repo: &PostgresTagRepository, name: &str, author: &str, minutes: i64) -> Tag {
    let mut tag = NewTag::new(name, TagState::Enabled, author);
    tag.created_at = Some(at(minutes));
    repo.insert(tag).await.expect("insert tag")
}

#[tokio::test]
async fn soft_deleted_tags_are_hidden_from_every_read() {
    let Some(pool) = integration_pool().await else {
        return;
    };
    let repo = PostgresTagRepository::new(pool.clone());
    let author = marker("tag");
    let name = author.clone();
    let by_name = TagFilter {
        name: Some(name.clone()),
        state: None,
    };

    let tag = insert_tag(&repo, &name, &author, 0).await;
    assert!(repo.exists_by_id(tag.id).await.unwrap());
    assert!(repo.exists_by_name(&name).await.unwrap());
    assert_eq!(repo.count(&by_name).await.unwrap(), 1);
    assert!(repo.find_by_id(tag.id).await.unwrap().is_some());

    let deleted_at = at(5);
    repo.soft_delete(tag.id, deleted_at).await.unwrap();

    assert!(!repo.exists_by_id(tag.id).await.unwrap());
    assert!(!repo.exists_by_name(&name).await.unwrap());
    assert_eq!(repo.count(&by_name).await.unwrap(), 0);
    assert!(
        repo.list_page(&by_name, PageRequest::from_page(None, 10))
            .await
            .unwrap()
            .is_empty()
    );
    assert!(repo.find_by_id(tag.id).await.unwrap().is_none());

    let stored: Option<DateTime<Utc>> =
        sqlx::query_scalar("SELECT deleted_at FROM blog_tag WHERE id = $1")
            .bind(i64::from(tag.id))
            .fetch_one(&pool)
            .await
            .expect("row is retained");
    assert_eq!(stored, Some(deleted_at));

    let again = repo.soft_delete(tag.id, at(6)).await.unwrap_err();
    assert!(matches!(again, DomainError::NotFound(_)), "{again:?}");

    let update = TagUpdate {
        id: tag.id,
        name: name.clone(),
        state: TagState::Disabled,
        modified_by: author.clone(),
        modified_at: None,
    };
    let err = repo.update(update).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)), "{err:?}");

    cleanup(&pool, &author).await;
}

#[tokio::test]
async fn tag_pages_follow_creation_time_then_id() {
    let Some(pool) = integration_pool().await else {
        return;
    };
    let repo = PostgresTagRepository::new(pool.clone());
    let author = marker("order");
    let filter = TagFilter {
        name: Some(author.clone()),
        state: Some(TagState::Enabled),
    };

    // insertion order differs from creation-time order
    let mid = insert_tag(&repo, &author, &author, 10).await;
    let newest = insert_tag(&repo, &author, &author, 20).await;
    let oldest = insert_tag(&repo, &author, &author, 0).await;
    let twin = insert_tag(&repo, &author, &author, 10).await;
    let older = insert_tag(&repo, &author, &author, 5).await;

    let page = |n| PageRequest::from_page(Some(n), 2);
    let ids = |tags: Vec<Tag>| tags.into_iter().map(|t| t.id).collect::<Vec<_>>();

    let first = ids(repo.list_page(&filter, page(1)).await.unwrap());
    let second = ids(repo.list_page(&filter, page(2)).await.unwrap());
    let third = ids(repo.list_page(&filter, page(3)).await.unwrap());

    assert_eq!(first, vec![newest.id, twin.id]);
    assert_eq!(second, vec![mid.id, older.id]);
    assert_eq!(third, vec![oldest.id]);
    assert_eq!(repo.count(&filter).await.unwrap(), 5);

    cleanup(&pool, &author).await;
}

#[tokio::test]
async fn tag_timestamps_default_to_database_time() {
    let Some(pool) = integration_pool().await else {
        return;
    };
    let repo = PostgresTagRepository::new(pool.clone());
    let author = marker("stamp");

    let before = Utc::now() - Duration::minutes(1);
    let tag = repo
        .insert(NewTag::new(author.clone(), TagState::Disabled, author.clone()))
        .await
        .unwrap();
    assert!(tag.created_at > before);
    assert_eq!(tag.modified_at, tag.created_at);
    assert!(tag.modified_by.is_none());
    assert!(tag.deleted_at.is_none());

    let explicit = insert_tag(&repo, &format!("{author}-x"), &author, 3).await;
    assert_eq!(explicit.created_at, at(3));

    let updated = repo
        .update(TagUpdate {
            id: explicit.id,
            name: explicit.name.clone(),
            state: TagState::Disabled,
            modified_by: "editor".into(),
            modified_at: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.created_at, at(3));
    assert!(updated.modified_at > before);
    assert_eq!(updated.modified_by.as_deref(), Some("editor"));
    assert_eq!(updated.state, TagState::Disabled);

    cleanup(&pool, &author).await;
}

#[tokio::test]
async fn articles_are_paged_newest_first_and_soft_deleted() {
    let Some(pool) = integration_pool().await else {
        return;
    };
    let tags = PostgresTagRepository::new(pool.clone());
    let repo = PostgresArticleRepository::new(pool.clone());
    let author = marker("article");
    let tag = insert_tag(&tags, &author, &author, 0).await;

    let new_article = |title: &str, minutes: i64| NewArticle {
        tag_id: tag.id,
        title: title.to_owned(),
        description: "desc".into(),
        content: "content".into(),
        state: ArticleState::Published,
        created_by: author.clone(),
        created_at: Some(at(minutes)),
        modified_at: None,
    };

    let mut inserted = Vec::new();
    for (title, minutes) in [("b", 2), ("d", 4), ("a", 1), ("e", 5), ("c", 3)] {
        inserted.push(repo.insert(new_article(title, minutes)).await.unwrap());
    }
    // modified_at falls back to the database clock, not to created_at
    assert_eq!(inserted[0].created_at, at(2));
    assert!(inserted[0].modified_at > at(2));

    let filter = ArticleFilter {
        created_by: Some(author.clone()),
        ..ArticleFilter::default()
    };
    let titles = |rows: Vec<Article>| rows.into_iter().map(|a| a.title).collect::<Vec<_>>();

    let first = titles(repo.list_page(&filter, PageRequest::from_page(Some(1), 2)).await.unwrap());
    let second = titles(repo.list_page(&filter, PageRequest::from_page(Some(2), 2)).await.unwrap());
    let third = titles(repo.list_page(&filter, PageRequest::from_page(Some(3), 2)).await.unwrap());
    assert_eq!(first, vec!["e", "d"]);
    assert_eq!(second, vec!["c", "b"]);
    assert_eq!(third, vec!["a"]);
    assert_eq!(repo.count(&filter).await.unwrap(), 5);

    let by_tag = ArticleFilter {
        tag_id: Some(tag.id),
        state: Some(ArticleState::Draft),
        ..ArticleFilter::default()
    };
    assert_eq!(repo.count(&by_tag).await.unwrap(), 0);

    let target = inserted[1].id;
    repo.soft_delete(target, at(10)).await.unwrap();
    assert!(!repo.exists_by_id(target).await.unwrap());
    assert!(repo.find_by_id(target).await.unwrap().is_none());
    assert_eq!(repo.count(&filter).await.unwrap(), 4);
    let first = titles(repo.list_page(&filter, PageRequest::from_page(Some(1), 2)).await.unwrap());
    assert_eq!(first, vec!["e", "c"]);

    let again = repo.soft_delete(target, at(11)).await.unwrap_err();
    assert!(matches!(again, DomainError::NotFound(_)), "{again:?}");

    let update = ArticleUpdate {
        id: target,
        tag_id: tag.id,
        title: "revived".into(),
        description: "desc".into(),
        content: "content".into(),
        state: ArticleState::Draft,
        modified_by: author.clone(),
        modified_at: None,
    };
    let err = repo.update(update).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)), "{err:?}");

    cleanup(&pool, &author).await;
}
