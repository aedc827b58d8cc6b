//! Ledger engine repository and service traits.

use async_trait::async_trait;

use super::ledger_model::LedgerOperation;
use crate::errors::Result;
use crate::transactions::Transaction;
use rust_decimal::Decimal;

/// Trait defining the contract for applying a ledger operation to storage.
///
/// Implementations must perform the whole sequence - read current balances,
/// apply the balance changes, append the transaction record - as ONE atomic
/// unit. On any failure nothing is committed: no balance is partially
/// updated and no record is appended. Concurrent applies touching the same
/// account must not lose updates.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Applies the operation and returns the appended transaction record.
    ///
    /// Fails with `DatabaseError::NotFound` when either account id does not
    /// resolve, and with `LedgerError::InsufficientFunds` when a transfer
    /// exceeds the source balance.
    async fn apply(&self, operation: LedgerOperation) -> Result<Transaction>;
}

/// Trait defining the contract for the ledger engine service.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Validates and applies an operation.
    async fn apply(&self, operation: LedgerOperation) -> Result<Transaction>;

    /// Moves `amount` from `source_id` to `target_id`. Equal ids are applied
    /// as a deposit.
    async fn transfer(
        &self,
        source_id: &str,
        target_id: &str,
        amount: Decimal,
    ) -> Result<Transaction>;

    /// Adds `amount` to the given account.
    async fn deposit(&self, account_id: &str, amount: Decimal) -> Result<Transaction>;
}
