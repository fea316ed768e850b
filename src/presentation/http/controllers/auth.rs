// src/presentation/http/controllers/auth.rs
use crate::application::commands::auth::LoginCommand;
use crate::presentation::http::{
    extractors::QueryParams,
    response::{ApiResult, IntoApiResult},
    state::HttpState,
};
use axum::Extension;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginParams {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// `GET /auth?username=&password=`
pub async fn login(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<LoginParams>,
) -> ApiResult<TokenResponse> {
    let command = LoginCommand {
        username: params.username,
        password: params.password,
    };

    state
        .services
        .auth_commands
        .login(command)
        .await
        .map(|issued| TokenResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            expires_in: issued.expires_in,
        })
        .into_api()
}
