// tests/support/mocks/accounts.rs
use super::time::fixed_now;
use async_trait::async_trait;
use blog_service::domain::{
    account::{Account, AccountRepository, NewAccount},
    errors::{DomainError, DomainResult},
};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryAccountRepo {
    rows: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepo {
    /// One account whose password was hashed by `PlainPasswordHasher`.
    pub fn with_account(username: &str, password: &str) -> Self {
        let repo = Self::default();
        repo.rows.lock().unwrap().push(Account {
            id: 1,
            username: username.into(),
            password_hash: format!("plain:{password}"),
            created_at: fixed_now(),
        });
        repo
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|account| account.username == username)
            .cloned())
    }

    async fn insert(&self, account: NewAccount) -> DomainResult<Account> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.username == account.username) {
            return Err(DomainError::Validation("username already exists".into()));
        }
        let created = Account {
            id: rows.len() as i64 + 1,
            username: account.username,
            password_hash: account.password_hash,
            created_at: account.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }
}
