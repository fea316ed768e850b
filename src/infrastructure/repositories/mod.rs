// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_account;
mod postgres_article;
mod postgres_tag;

pub(crate) use error::map_sqlx;
pub use postgres_account::PostgresAccountRepository;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_tag::PostgresTagRepository;
