use super::{AuthCommandService, service::CREDENTIAL_MAX_LEN};
use crate::{
    application::{
        ApplicationResult, ResultCode,
        error::ResultCodeExt,
        validation::{Validate, Validator},
    },
    domain::account::NewAccount,
};

/// Seeds a login account at startup when none with that name exists.
#[derive(Clone)]
pub struct EnsureAccountCommand {
    pub username: String,
    pub password: String,
}

impl Validate for EnsureAccountCommand {
    fn validate(&self) -> ApplicationResult<()> {
        let mut v = Validator::new();
        v.required("username", &self.username)
            .max_size("username", &self.username, CREDENTIAL_MAX_LEN)
            .required("password", &self.password)
            .max_size("password", &self.password, CREDENTIAL_MAX_LEN);
        v.finish()
    }
}

impl AuthCommandService {
    /// Returns `true` when a new account was created.
    pub async fn ensure_account(&self, command: EnsureAccountCommand) -> ApplicationResult<bool> {
        command.validate()?;

        let existing = self
            .accounts
            .find_by_username(&command.username)
            .await
            .or_code(ResultCode::Error)?;
        if existing.is_some() {
            return Ok(false);
        }

        let password_hash = self.password_hasher.hash(&command.password).await?;
        let account = self
            .accounts
            .insert(NewAccount {
                username: command.username,
                password_hash,
                created_at: self.clock.now(),
            })
            .await
            .or_code(ResultCode::Error)?;

        tracing::info!(username = %account.username, "bootstrap account created");
        Ok(true)
    }
}
