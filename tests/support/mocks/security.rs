// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_service::application::{ApplicationResult, ports::security::PasswordHasher};

/// Stores passwords as `plain:<password>` so tests can seed accounts
/// without running argon2.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash.strip_prefix("plain:") == Some(password))
    }
}
