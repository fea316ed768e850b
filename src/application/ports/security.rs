// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject},
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("missing token")]
    Missing,
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("token expired")]
    Expired,
    #[error("token signing failed: {0}")]
    Signing(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Returns `Ok(false)` on a mismatch; errors are reserved for malformed hashes.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

/// Issues and checks signed, time-limited credentials. Verification is
/// stateless: signature and expiry are the only inputs.
pub trait TokenManager: Send + Sync {
    fn issue(&self, username: &str) -> Result<AuthTokenDto, TokenError>;
    fn verify(&self, token: &str) -> Result<TokenSubject, TokenError>;
}
