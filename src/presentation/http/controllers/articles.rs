// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ListPage},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::{
    extractors::{IdPath, JsonBody, QueryParams, empty_as_none},
    response::{ApiResult, IntoApiResult},
    state::HttpState,
};
use axum::Extension;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub state: Option<i16>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub tag_id: Option<i64>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
}

/// Shared body for create and update; the actor field differs.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleRequest {
    #[serde(default, alias = "tagId")]
    pub tag_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub state: i16,
    #[serde(default, alias = "createdBy")]
    pub created_by: String,
    #[serde(default, alias = "modifiedBy")]
    pub modified_by: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> ApiResult<ListPage<ArticleDto>> {
    let query = ListArticlesQuery {
        state: params.state,
        tag_id: params.tag_id,
        created_by: params.created_by.filter(|name| !name.is_empty()),
        page: params.page,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_api()
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> ApiResult<ArticleDto> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_api()
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> ApiResult<ArticleDto> {
    let command = CreateArticleCommand {
        tag_id: payload.tag_id,
        title: payload.title,
        description: payload.desc,
        content: payload.content,
        state: payload.state,
        created_by: payload.created_by,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_api()
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> ApiResult<ArticleDto> {
    let command = UpdateArticleCommand {
        id,
        tag_id: payload.tag_id,
        title: payload.title,
        description: payload.desc,
        content: payload.content,
        state: payload.state,
        modified_by: payload.modified_by,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_api()
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_api()
}
