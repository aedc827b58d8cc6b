//! Database model for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use ledger_core::accounts::Account;

/// Parses a decimal stored as TEXT. Balances are always written via
/// `Decimal::to_string`, so a parse failure means the row was tampered with;
/// it is logged and treated as zero rather than poisoning every read path.
pub(crate) fn parse_stored_decimal(value_str: &str, field_name: &str) -> Decimal {
    Decimal::from_str(value_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse {} '{}' as Decimal: {}. Falling back to ZERO.",
            field_name,
            value_str,
            e
        );
        Decimal::ZERO
    })
}

/// Database model for accounts
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub currency: String,
    pub balance: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        let balance = parse_stored_decimal(&db.balance, "balance");
        Self {
            id: db.id,
            currency: db.currency,
            balance,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<&Account> for AccountDB {
    fn from(domain: &Account) -> Self {
        Self {
            id: domain.id.clone(),
            currency: domain.currency.clone(),
            balance: domain.balance.to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
