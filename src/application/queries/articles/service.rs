use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) page_size: u32,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>, page_size: u32) -> Self {
        Self { repo, page_size }
    }
}
