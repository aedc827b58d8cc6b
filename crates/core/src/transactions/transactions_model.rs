//! Transaction log domain models.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;

/// Outcome recorded on a transaction.
///
/// `Failed` is part of the data model for forward compatibility, but the
/// engine never persists it: a failed apply rolls back and appends nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransactionStatus {
    #[default]
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "Success",
            TransactionStatus::Failed => "Failed",
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(TransactionStatus::Success),
            "Failed" => Ok(TransactionStatus::Failed),
            other => Err(format!("Unknown transaction status: {}", other)),
        }
    }
}

/// Domain model for a record in the transaction log.
///
/// Records are appended exactly once per successful ledger operation and are
/// never mutated afterwards. Account references are stored as ids, not owning
/// references: deleting an account leaves its records in place as history.
///
/// A deposit is a record whose source and target account ids are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub source_account_id: String,
    pub target_account_id: String,
    /// Gross amount requested by the caller.
    pub balance_brutto: Decimal,
    /// Net amount applied to the target side. Equal to `balance_brutto`
    /// today; kept separate so a fee model can be added without a schema
    /// change.
    pub balance_netto: Decimal,
    /// Currency of the source account at the time of the transaction.
    pub currency: String,
    pub status: TransactionStatus,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Whether this record is a deposit (source and target are the same
    /// account).
    pub fn is_deposit(&self) -> bool {
        self.source_account_id == self.target_account_id
    }
}

/// Reconstructs an account's balance over time from its transaction log.
///
/// `transactions` must be the account's records most-recent-first, as
/// returned by `TransactionRepositoryTrait::get_by_account`. Walks the log
/// backwards from the current balance, undoing each record's effect, and
/// returns the balances in chronological order: the first element is the
/// balance before the oldest record, the last is the current balance.
/// Records not referencing the account are skipped.
pub fn balance_history(account: &Account, transactions: &[Transaction]) -> Vec<Decimal> {
    let mut balances = Vec::with_capacity(transactions.len() + 1);
    let mut balance = account.balance;
    balances.push(balance);

    for transaction in transactions {
        if transaction.is_deposit() && transaction.target_account_id == account.id {
            balance -= transaction.balance_netto;
        } else if transaction.source_account_id == account.id {
            balance += transaction.balance_brutto;
        } else if transaction.target_account_id == account.id {
            balance -= transaction.balance_netto;
        } else {
            continue;
        }
        balances.push(balance);
    }

    balances.reverse();
    balances
}
