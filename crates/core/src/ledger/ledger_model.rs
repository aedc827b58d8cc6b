//! Ledger operation model and the pure transfer/deposit rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounts::Account;
use crate::errors::LedgerError;
use crate::transactions::{Transaction, TransactionStatus};
use crate::{Error, Result};

/// A money movement requested from the ledger engine.
///
/// The operation kind is an explicit variant rather than being inferred from
/// id equality at application time: `new` performs that classification once,
/// so a deposit can never take the transfer path and be double-counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LedgerOperation {
    /// Adds `amount` to a single account, exactly once.
    Deposit { account_id: String, amount: Decimal },
    /// Moves `amount` from one account to a different account. Net equals
    /// gross; there is no fee model.
    Transfer {
        source_id: String,
        target_id: String,
        amount: Decimal,
    },
}

impl LedgerOperation {
    /// Classifies a source/target/amount triple into an operation.
    ///
    /// Equal ids mean a deposit; different ids mean a transfer.
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        let source_id = source_id.into();
        let target_id = target_id.into();
        if source_id == target_id {
            LedgerOperation::Deposit {
                account_id: source_id,
                amount,
            }
        } else {
            LedgerOperation::Transfer {
                source_id,
                target_id,
                amount,
            }
        }
    }

    /// Rejects non-positive amounts before any mutation happens.
    pub fn validate(&self) -> Result<()> {
        if self.amount() <= Decimal::ZERO {
            return Err(Error::Ledger(LedgerError::InvalidAmount(self.amount())));
        }
        Ok(())
    }

    pub fn amount(&self) -> Decimal {
        match self {
            LedgerOperation::Deposit { amount, .. } => *amount,
            LedgerOperation::Transfer { amount, .. } => *amount,
        }
    }

    pub fn source_account_id(&self) -> &str {
        match self {
            LedgerOperation::Deposit { account_id, .. } => account_id,
            LedgerOperation::Transfer { source_id, .. } => source_id,
        }
    }

    pub fn target_account_id(&self) -> &str {
        match self {
            LedgerOperation::Deposit { account_id, .. } => account_id,
            LedgerOperation::Transfer { target_id, .. } => target_id,
        }
    }

    /// Builds the transaction record for this operation.
    ///
    /// Fresh id, gross == net == amount, status `Success`. `currency` is the
    /// source account's currency, captured before any balance mutation.
    pub fn to_transaction(&self, currency: impl Into<String>) -> Transaction {
        Transaction {
            id: Uuid::new_v4().to_string(),
            source_account_id: self.source_account_id().to_string(),
            target_account_id: self.target_account_id().to_string(),
            balance_brutto: self.amount(),
            balance_netto: self.amount(),
            currency: currency.into(),
            status: TransactionStatus::Success,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// A new balance for one account, produced by the transfer/deposit rule.
///
/// The order of changes is significant: the repository persists them in
/// sequence (source first for transfers).
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChange {
    pub account_id: String,
    pub new_balance: Decimal,
}

/// The transfer/deposit rule, applied to freshly read account state.
///
/// For a deposit, `source` and `target` are the same account and the amount
/// is added exactly once. For a transfer, the source must hold at least the
/// amount; the source is debited and the target credited (net == gross).
///
/// This function is pure. The repository calls it inside its database
/// transaction so the insufficient-funds check always sees current balances
/// and cannot race with a concurrent apply.
pub fn compute_balance_changes(
    operation: &LedgerOperation,
    source: &Account,
    target: &Account,
) -> Result<Vec<BalanceChange>> {
    match operation {
        LedgerOperation::Deposit { account_id, amount } => Ok(vec![BalanceChange {
            account_id: account_id.clone(),
            new_balance: source.balance + amount,
        }]),
        LedgerOperation::Transfer {
            source_id,
            target_id,
            amount,
        } => {
            if *amount > source.balance {
                return Err(Error::Ledger(LedgerError::InsufficientFunds {
                    account_id: source_id.clone(),
                    requested: *amount,
                    available: source.balance,
                }));
            }
            Ok(vec![
                BalanceChange {
                    account_id: source_id.clone(),
                    new_balance: source.balance - amount,
                },
                BalanceChange {
                    account_id: target_id.clone(),
                    new_balance: target.balance + amount,
                },
            ])
        }
    }
}
