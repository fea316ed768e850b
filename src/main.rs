use anyhow::Result;
use blog_service::{
    application::{
        commands::auth::EnsureAccountCommand,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        services::ApplicationServices,
    },
    config::{AppConfig, RunMode},
    domain::{account::AccountRepository, article::ArticleRepository, tag::TagRepository},
    infrastructure::{
        database::{self, PoolLimits},
        repositories::{
            PostgresAccountRepository, PostgresArticleRepository, PostgresTagRepository,
        },
        security::{password::Argon2PasswordHasher, token::JwtTokenManager},
        time::SystemClock,
    },
    presentation::http::{
        routes::{RouterOptions, build_router},
        state::HttpState,
    },
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.run_mode());
    tracing::info!(run_mode = %config.run_mode(), "starting blog service");

    let pool = database::init_pool(
        config.database_url(),
        PoolLimits {
            max_connections: config.db_max_connections(),
            min_connections: config.db_min_connections(),
        },
    )
    .await?;
    database::run_migrations(&pool).await?;

    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));
    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(PostgresArticleRepository::new(pool.clone()));
    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_ttl = chrono::Duration::from_std(config.token_ttl())?;
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        token_ttl,
        Arc::clone(&clock),
    )?);

    let services = Arc::new(ApplicationServices::new(
        tag_repo,
        article_repo,
        account_repo,
        password_hasher,
        token_manager,
        clock,
        config.page_size(),
    ));

    if let Some(account) = config.bootstrap_account() {
        services
            .auth_commands
            .ensure_account(EnsureAccountCommand {
                username: account.username.clone(),
                password: account.password.clone(),
            })
            .await?;
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(
        state,
        RouterOptions {
            read_timeout: config.read_timeout(),
            write_timeout: config.write_timeout(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(run_mode: RunMode) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(env_filter));

    let initialised = if run_mode == RunMode::Release {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if initialised.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
