use super::{AuthCommandService, service::CREDENTIAL_MAX_LEN};
use crate::application::{
    ApplicationResult, ResultCode,
    dto::AuthTokenDto,
    error::{ApplicationError, ResultCodeExt},
    validation::{Validate, Validator},
};

#[derive(Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for LoginCommand {
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
    /// Checks the credentials against `blog_auth` and issues a token whose
    /// subject is the username.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthTokenDto> {
        command.validate()?;

        let account = self
            .accounts
            .find_by_username(&command.username)
            .await
            .or_code(ResultCode::AuthCheckTokenFail)?
            .ok_or_else(|| ApplicationError::unauthorized(ResultCode::AuthFail))?;

        let matches = self
            .password_hasher
            .verify(&command.password, &account.password_hash)
            .await?;
        if !matches {
            tracing::info!(username = %command.username, "rejected login");
            return Err(ApplicationError::unauthorized(ResultCode::AuthFail));
        }

        let token = self.token_manager.issue(&account.username)?;
        tracing::info!(username = %account.username, expires_at = %token.expires_at, "token issued");
        Ok(token)
    }
}
