// tests/support/helpers.rs
use super::mocks::{
    InMemoryAccountRepo, InMemoryArticleRepo, InMemoryTagRepo, PlainPasswordHasher, TestClock,
};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use blog_service::{
    application::{
        ports::security::{PasswordHasher, TokenManager},
        ports::time::Clock,
        services::ApplicationServices,
    },
    domain::{account::AccountRepository, article::ArticleRepository, tag::TagRepository},
    infrastructure::security::token::JwtTokenManager,
    presentation::http::{
        routes::{RouterOptions, build_router},
        state::HttpState,
    },
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "s3cret";
pub const PAGE_SIZE: u32 = 2;

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<TestClock>,
    pub tokens: Arc<JwtTokenManager>,
}

impl TestApp {
    pub fn token(&self) -> String {
        self.tokens.issue(TEST_USER).expect("issue test token").token
    }

    /// Appends a valid token to `path`.
    pub fn authed(&self, path: &str) -> String {
        let sep = if path.contains('?') { '&' } else { '?' };
        format!("{path}{sep}token={}", self.token())
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let resp = self.router.clone().oneshot(req).await.expect("router call");
        let status = resp.status();
        let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }
}

pub fn build_app(
    tags: Arc<dyn TagRepository>,
    articles: Arc<dyn ArticleRepository>,
) -> TestApp {
    let accounts: Arc<dyn AccountRepository> =
        Arc::new(InMemoryAccountRepo::with_account(TEST_USER, TEST_PASSWORD));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(PlainPasswordHasher);
    let clock = Arc::new(TestClock::default());
    let clock_port: Arc<dyn Clock> = clock.clone();
    let tokens = Arc::new(
        JwtTokenManager::new(TEST_SECRET, chrono::Duration::hours(3), Arc::clone(&clock_port))
            .expect("token manager"),
    );
    let token_port: Arc<dyn TokenManager> = tokens.clone();

    let services = Arc::new(ApplicationServices::new(
        tags, articles, accounts, hasher, token_port, clock_port, PAGE_SIZE,
    ));
    let router = build_router(HttpState { services }, RouterOptions::default());

    TestApp {
        router,
        clock,
        tokens,
    }
}

/// App over in-memory repositories, with handles kept for inspection.
pub fn in_memory_app() -> (TestApp, Arc<InMemoryTagRepo>, Arc<InMemoryArticleRepo>) {
    let tags = Arc::new(InMemoryTagRepo::default());
    let articles = Arc::new(InMemoryArticleRepo::default());
    let app = build_app(tags.clone(), articles.clone());
    (app, tags, articles)
}

pub fn code(body: &Value) -> i64 {
    body["code"].as_i64().expect("envelope code")
}
