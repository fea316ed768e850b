// src/presentation/http/routes.rs
use crate::application::ResultCode;
use crate::presentation::http::{
    controllers::{articles, auth, tags},
    middleware::auth_gate,
    response::ApiError,
    state::HttpState,
};
use axum::{
    Extension, Json, Router,
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};

/// Transport settings applied around every route.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(60),
            write_timeout: Duration::from_secs(60),
            allowed_origins: Vec::new(),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

fn api_v1() -> Router {
    Router::new()
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/{id}", put(tags::update_tag).delete(tags::delete_tag))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route_layer(middleware::from_fn(auth_gate))
}

/// Turns the bare 408 produced by the handler timeout into an envelope.
async fn envelope_timeout(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;
    if res.status() != StatusCode::REQUEST_TIMEOUT {
        return res;
    }
    tracing::warn!("request exceeded write timeout");
    ApiError::new(StatusCode::REQUEST_TIMEOUT, ResultCode::Error).into_response()
}

fn with_timeouts(router: Router, options: &RouterOptions) -> Router {
    router
        .layer(RequestBodyTimeoutLayer::new(options.read_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            options.write_timeout,
        ))
        .layer(middleware::from_fn(envelope_timeout))
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/auth", get(auth::login))
        .nest("/api/v1", api_v1())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins));

    with_timeouts(router, &options).layer(Extension(state))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
