// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, auth::AuthCommandService, tags::TagCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{articles::ArticleQueryService, tags::TagQueryService},
    },
    domain::{account::AccountRepository, article::ArticleRepository, tag::TagRepository},
};

pub struct ApplicationServices {
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub auth_commands: Arc<AuthCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        tag_repo: Arc<dyn TagRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        page_size: u32,
    ) -> Self {
        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
        ));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo), page_size));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            page_size,
        ));

        let auth_commands = Arc::new(AuthCommandService::new(
            account_repo,
            password_hasher,
            Arc::clone(&token_manager),
            clock,
        ));

        Self {
            tag_commands,
            tag_queries,
            article_commands,
            article_queries,
            auth_commands,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
