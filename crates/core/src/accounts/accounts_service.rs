use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing accounts.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    /// Creates a new account with a zero balance
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!("Creating account with currency {}", new_account.currency);
        self.repository.create(new_account).await
    }

    /// Upserts an account by id
    async fn save_account(&self, account: Account) -> Result<Account> {
        self.repository.save(account).await
    }

    /// Retrieves an account by its ID
    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    /// Lists all accounts, ordered by currency, then balance descending
    fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    /// Lists same-currency accounts excluding the given account
    fn get_accounts_by_currency_excluding(
        &self,
        account_id: &str,
        currency: &str,
    ) -> Result<Vec<Account>> {
        self.repository
            .list_by_currency_excluding(account_id, currency)
    }

    /// Gets, per currency, the account(s) with the highest balance
    fn get_max_balance_per_currency(&self) -> Result<Vec<Account>> {
        self.repository.max_balance_per_currency()
    }

    /// Deletes an account by its ID
    async fn delete_account(&self, account_id: &str) -> Result<()> {
        self.repository.delete(account_id).await?;
        Ok(())
    }

    /// Deletes all accounts
    async fn delete_all_accounts(&self) -> Result<usize> {
        self.repository.delete_all().await
    }
}
