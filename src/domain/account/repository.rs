use crate::domain::account::entity::{Account, NewAccount};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>>;
    async fn insert(&self, account: NewAccount) -> DomainResult<Account>;
}
