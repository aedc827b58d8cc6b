//! Database model for the transaction log.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use ledger_core::transactions::{Transaction, TransactionStatus};

use crate::accounts::parse_stored_decimal;

/// Database model for transactions
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub source_account: String,
    pub target_account: String,
    pub balance_brutto: String,
    pub balance_netto: String,
    pub currency: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

// Conversion implementations
impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        let status = TransactionStatus::from_str(&db.status).unwrap_or_else(|e| {
            log::error!("{}. Falling back to Success.", e);
            TransactionStatus::default()
        });
        Self {
            id: db.id,
            source_account_id: db.source_account,
            target_account_id: db.target_account,
            balance_brutto: parse_stored_decimal(&db.balance_brutto, "balance_brutto"),
            balance_netto: parse_stored_decimal(&db.balance_netto, "balance_netto"),
            currency: db.currency,
            status,
            created_at: db.created_at,
        }
    }
}

impl From<&Transaction> for TransactionDB {
    fn from(domain: &Transaction) -> Self {
        Self {
            id: domain.id.clone(),
            source_account: domain.source_account_id.clone(),
            target_account: domain.target_account_id.clone(),
            balance_brutto: domain.balance_brutto.to_string(),
            balance_netto: domain.balance_netto.to_string(),
            currency: domain.currency.clone(),
            status: domain.status.as_str().to_string(),
            created_at: domain.created_at,
        }
    }
}
