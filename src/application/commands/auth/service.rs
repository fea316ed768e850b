use std::sync::Arc;

use crate::{
    application::ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    domain::account::AccountRepository,
};

pub(super) const CREDENTIAL_MAX_LEN: usize = 50;

pub struct AuthCommandService {
    pub(super) accounts: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthCommandService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            accounts,
            password_hasher,
            token_manager,
            clock,
        }
    }
}
