use std::sync::Arc;

use super::transactions_model::Transaction;
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service exposing the read and administrative paths of the transaction log.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    /// Retrieves a transaction by its ID
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.repository.get_by_id(transaction_id)
    }

    /// Lists all transactions, oldest first
    fn get_all_transactions(&self) -> Result<Vec<Transaction>> {
        self.repository.get_all()
    }

    /// Lists an account's transactions, most-recent-first
    fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.repository.get_by_account(account_id)
    }

    /// Deletes a transaction by its ID
    async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.repository.delete(transaction_id).await?;
        Ok(())
    }

    /// Deletes all transactions
    async fn delete_all_transactions(&self) -> Result<usize> {
        self.repository.delete_all().await
    }
}
