use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connection limits for the shared pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolLimits {
    pub max_connections: u32,
    pub min_connections: u32,
}

pub async fn init_pool(database_url: &str, limits: PoolLimits) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(limits.max_connections)
        .min_connections(limits.min_connections.min(limits.max_connections))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
