//! Transaction log repository and service traits.
//!
//! The log is append-only: appending happens exclusively through the ledger
//! repository, inside the same atomic unit as the balance updates. These
//! traits expose the read and administrative paths.

use async_trait::async_trait;

use super::transactions_model::Transaction;
use crate::errors::Result;

/// Trait defining the contract for Transaction log repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Retrieves a transaction by its ID.
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;

    /// Lists all transactions, oldest first.
    fn get_all(&self) -> Result<Vec<Transaction>>;

    /// Lists the transactions referencing the given account as source or
    /// target, most-recent-first.
    fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Deletes a transaction by its ID. Administrative operation; the engine
    /// itself never deletes records.
    async fn delete(&self, transaction_id: &str) -> Result<usize>;

    /// Deletes all transactions. Administrative operation.
    async fn delete_all(&self) -> Result<usize>;
}

/// Trait defining the contract for Transaction log service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Retrieves a transaction by ID.
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    /// Gets all transactions, oldest first.
    fn get_all_transactions(&self) -> Result<Vec<Transaction>>;

    /// Gets an account's transactions, most-recent-first.
    fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Deletes a transaction by ID. Administrative operation.
    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;

    /// Deletes all transactions. Administrative operation.
    async fn delete_all_transactions(&self) -> Result<usize>;
}
