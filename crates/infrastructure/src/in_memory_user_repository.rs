use std::collections::HashMap;

use async_trait::async_trait;
use praxis_application::UserRepository;
use praxis_core::{AppError, AppResult, UserId};
use praxis_domain::UserAccount;
use tokio::sync::RwLock;

/// In-memory user account repository.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<HashMap<UserId, UserAccount>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save_account(&self, account: UserAccount) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.id()) {
            return Err(AppError::Conflict(format!(
                "account '{}' already exists",
                account.id()
            )));
        }

        accounts.insert(account.id(), account);
        Ok(())
    }

    async fn update_account(&self, account: UserAccount) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id()) {
            return Err(AppError::NotFound(format!(
                "account '{}' does not exist",
                account.id()
            )));
        }

        accounts.insert(account.id(), account);
        Ok(())
    }

    async fn find_account(&self, user_id: UserId) -> AppResult<Option<UserAccount>> {
        Ok(self.accounts.read().await.get(&user_id).cloned())
    }

    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
        let accounts = self.accounts.read().await;

        let mut listed: Vec<UserAccount> = accounts.values().cloned().collect();
        listed.sort_by(|left, right| {
            left.display_name()
                .as_str()
                .cmp(right.display_name().as_str())
        });

        Ok(listed)
    }
}
