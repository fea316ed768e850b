// src/presentation/http/controllers/tags.rs
use crate::application::{
    commands::tags::{CreateTagCommand, DeleteTagCommand, UpdateTagCommand},
    dto::{ListPage, TagDto},
    queries::tags::ListTagsQuery,
};
use crate::presentation::http::{
    extractors::{IdPath, JsonBody, QueryParams, empty_as_none},
    response::{ApiResult, IntoApiResult},
    state::HttpState,
};
use axum::Extension;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TagListParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub state: Option<i16>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTagRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: i16,
    #[serde(default, alias = "createdBy")]
    pub created_by: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTagRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: i16,
    #[serde(default, alias = "modifiedBy")]
    pub modified_by: String,
}

pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<TagListParams>,
) -> ApiResult<ListPage<TagDto>> {
    let query = ListTagsQuery {
        name: params.name,
        state: params.state,
        page: params.page,
    };

    state.services.tag_queries.list_tags(query).await.into_api()
}

pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateTagRequest>,
) -> ApiResult<TagDto> {
    let command = CreateTagCommand {
        name: payload.name,
        state: payload.state,
        created_by: payload.created_by,
    };

    state
        .services
        .tag_commands
        .create_tag(command)
        .await
        .into_api()
}

pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UpdateTagRequest>,
) -> ApiResult<TagDto> {
    let command = UpdateTagCommand {
        id,
        name: payload.name,
        state: payload.state,
        modified_by: payload.modified_by,
    };

    state
        .services
        .tag_commands
        .update_tag(command)
        .await
        .into_api()
}

pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    state
        .services
        .tag_commands
        .delete_tag(DeleteTagCommand { id })
        .await
        .into_api()
}
