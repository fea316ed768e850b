// src/application/error.rs
use crate::application::{
    ResultCode,
    ports::security::TokenError,
    validation::{Rule, Violations},
};
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(Violations),

    #[error("resource not found: {0}")]
    NotFound(ResultCode),

    #[error("conflict: {0}")]
    Conflict(ResultCode),

    #[error("unauthorized: {0}")]
    Unauthorized(ResultCode),

    #[error("storage failure, {code}: {source}")]
    Storage {
        code: ResultCode,
        #[source]
        source: DomainError,
    },

    #[error("infrastructure failure, {code}: {message}")]
    Infrastructure { code: ResultCode, message: String },
}

impl ApplicationError {
    pub fn invalid_field(field: &'static str, rule: Rule) -> Self {
        Self::Validation(Violations::single(field, rule))
    }

    pub fn not_found(code: ResultCode) -> Self {
        Self::NotFound(code)
    }

    pub fn conflict(code: ResultCode) -> Self {
        Self::Conflict(code)
    }

    pub fn unauthorized(code: ResultCode) -> Self {
        Self::Unauthorized(code)
    }

    pub fn storage(code: ResultCode, source: DomainError) -> Self {
        Self::Storage { code, source }
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::infrastructure_with(ResultCode::Error, msg)
    }

    pub fn infrastructure_with(code: ResultCode, msg: impl Into<String>) -> Self {
        Self::Infrastructure {
            code,
            message: msg.into(),
        }
    }

    /// Business code reported to the client for this failure.
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::Validation(_) => ResultCode::InvalidParams,
            Self::NotFound(code)
            | Self::Conflict(code)
            | Self::Unauthorized(code)
            | Self::Storage { code, .. }
            | Self::Infrastructure { code, .. } => *code,
        }
    }
}

impl From<TokenError> for ApplicationError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing => Self::Unauthorized(ResultCode::InvalidParams),
            TokenError::Invalid(_) => Self::Unauthorized(ResultCode::AuthCheckTokenFail),
            TokenError::Expired => Self::Unauthorized(ResultCode::AuthCheckTokenTimeout),
            TokenError::Signing(msg) => Self::infrastructure_with(ResultCode::AuthTokenFail, msg),
        }
    }
}

/// Attaches the failure-site code to a repository result.
pub trait ResultCodeExt<T> {
    fn or_code(self, code: ResultCode) -> ApplicationResult<T>;

    /// Like `or_code`, but a row that vanished between the existence check
    /// and the write is reported as the business code `missing`.
    fn or_missing(self, missing: ResultCode, failed: ResultCode) -> ApplicationResult<T>;
}

impl<T> ResultCodeExt<T> for Result<T, DomainError> {
    fn or_code(self, code: ResultCode) -> ApplicationResult<T> {
        self.map_err(|err| ApplicationError::storage(code, err))
    }

    fn or_missing(self, missing: ResultCode, failed: ResultCode) -> ApplicationResult<T> {
        self.map_err(|err| match err {
            DomainError::NotFound(_) => ApplicationError::not_found(missing),
            other => ApplicationError::storage(failed, other),
        })
    }
}
