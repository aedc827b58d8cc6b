use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::ledger_model::LedgerOperation;
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::errors::Result;
use crate::transactions::Transaction;

/// The ledger engine service.
///
/// Validates operations and delegates the atomic application to the ledger
/// repository. On success both the balance mutation(s) and the log append
/// have been committed; on failure nothing has.
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    /// Creates a new LedgerService instance
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl LedgerServiceTrait for LedgerService {
    /// Validates and applies an operation
    async fn apply(&self, operation: LedgerOperation) -> Result<Transaction> {
        operation.validate()?;
        debug!(
            "Applying ledger operation: {} -> {} amount {}",
            operation.source_account_id(),
            operation.target_account_id(),
            operation.amount()
        );
        self.repository.apply(operation).await
    }

    /// Moves `amount` from `source_id` to `target_id`
    async fn transfer(
        &self,
        source_id: &str,
        target_id: &str,
        amount: Decimal,
    ) -> Result<Transaction> {
        self.apply(LedgerOperation::new(source_id, target_id, amount))
            .await
    }

    /// Adds `amount` to the given account
    async fn deposit(&self, account_id: &str, amount: Decimal) -> Result<Transaction> {
        self.apply(LedgerOperation::new(account_id, account_id, amount))
            .await
    }
}
