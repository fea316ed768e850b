use std::sync::Arc;

use crate::domain::tag::TagRepository;

pub struct TagQueryService {
    pub(super) repo: Arc<dyn TagRepository>,
    pub(super) page_size: u32,
}

impl TagQueryService {
    pub fn new(repo: Arc<dyn TagRepository>, page_size: u32) -> Self {
        Self { repo, page_size }
    }
}
