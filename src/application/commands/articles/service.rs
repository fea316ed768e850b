// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult, ResultCode,
        error::{ApplicationError, ResultCodeExt},
        ports::time::Clock,
        validation::Validator,
    },
    domain::{
        article::{ArticleId, ArticleRepository},
        tag::{TagId, TagRepository},
    },
};

const TITLE_MAX_LEN: usize = 100;
const DESC_MAX_LEN: usize = 255;
const CONTENT_MAX_LEN: usize = 65_535;
pub(super) const ACTOR_MAX_LEN: usize = 100;

pub struct ArticleCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        tag_repo: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            tag_repo,
            clock,
        }
    }

    pub(super) async fn ensure_article_exists(&self, id: ArticleId) -> ApplicationResult<()> {
        let exists = self
            .article_repo
            .exists_by_id(id)
            .await
            .or_code(ResultCode::CheckArticleExistFail)?;
        if exists {
            Ok(())
        } else {
            Err(ApplicationError::not_found(ResultCode::ArticleNotFound))
        }
    }

    pub(super) async fn ensure_tag_exists(&self, id: TagId) -> ApplicationResult<()> {
        let exists = self
            .tag_repo
            .exists_by_id(id)
            .await
            .or_code(ResultCode::CheckTagExistFail)?;
        if exists {
            Ok(())
        } else {
            Err(ApplicationError::not_found(ResultCode::TagNotFound))
        }
    }
}

/// Rules shared by the create and update forms.
pub(super) fn check_body(
    v: &mut Validator,
    tag_id: i64,
    title: &str,
    description: &str,
    content: &str,
    state: i16,
) {
    v.min("tag_id", tag_id, 1)
        .required("title", title)
        .max_size("title", title, TITLE_MAX_LEN)
        .required("desc", description)
        .max_size("desc", description, DESC_MAX_LEN)
        .required("content", content)
        .max_size("content", content, CONTENT_MAX_LEN)
        .range("state", i64::from(state), 0, 1);
}
