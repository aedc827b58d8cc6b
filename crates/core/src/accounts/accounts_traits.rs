//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
/// The trait is database-agnostic - storage-specific details are handled
/// by concrete implementations.
///
/// Balance mutations caused by transfers and deposits do NOT go through this
/// trait; they are applied atomically by the ledger repository.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account with a zero balance.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Upserts an account by id: inserts if absent, otherwise updates the
    /// mutable fields of the existing record.
    async fn save(&self, account: Account) -> Result<Account>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts, ordered by currency, then balance descending.
    fn list(&self) -> Result<Vec<Account>>;

    /// Lists accounts holding the given currency, excluding the given account.
    fn list_by_currency_excluding(
        &self,
        account_id: &str,
        currency: &str,
    ) -> Result<Vec<Account>>;

    /// For each currency, returns the account(s) holding the maximum balance.
    ///
    /// Ties return all tied accounts.
    fn max_balance_per_currency(&self) -> Result<Vec<Account>>;

    /// Deletes an account by its ID.
    ///
    /// Returns the number of deleted records. Transaction records referencing
    /// the account are kept; their account ids become historical snapshots.
    async fn delete(&self, account_id: &str) -> Result<usize>;

    /// Deletes all accounts. Administrative operation.
    async fn delete_all(&self) -> Result<usize>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business validation and delegates persistence
/// to the repository.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Upserts an account by id.
    async fn save_account(&self, account: Account) -> Result<Account>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Gets all accounts, ordered by currency, then balance descending.
    fn get_all_accounts(&self) -> Result<Vec<Account>>;

    /// Gets the accounts an account could transfer to: same currency,
    /// excluding the account itself.
    fn get_accounts_by_currency_excluding(
        &self,
        account_id: &str,
        currency: &str,
    ) -> Result<Vec<Account>>;

    /// Gets, per currency, the account(s) with the highest balance.
    fn get_max_balance_per_currency(&self) -> Result<Vec<Account>>;

    /// Deletes an account by its ID.
    async fn delete_account(&self, account_id: &str) -> Result<()>;

    /// Deletes all accounts. Administrative operation.
    async fn delete_all_accounts(&self) -> Result<usize>;
}
