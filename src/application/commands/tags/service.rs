// src/application/commands/tags/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult, ResultCode,
        error::{ApplicationError, ResultCodeExt},
        ports::time::Clock,
    },
    domain::tag::{TagId, TagRepository},
};

pub(super) const NAME_MAX_LEN: usize = 100;
pub(super) const ACTOR_MAX_LEN: usize = 100;

pub struct TagCommandService {
    pub(super) repo: Arc<dyn TagRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TagCommandService {
    pub fn new(repo: Arc<dyn TagRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub(super) async fn ensure_exists(&self, id: TagId) -> ApplicationResult<()> {
        let exists = self
            .repo
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
