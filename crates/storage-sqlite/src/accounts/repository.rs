use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::accounts;

use ledger_core::accounts::{Account, AccountRepositoryTrait, NewAccount};
use ledger_core::errors::{DatabaseError, Error, Result};

use super::model::AccountDB;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn load_all(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;
        let results = accounts::table
            .select(AccountDB::as_select())
            .load::<AccountDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(results.into_iter().map(Account::from).collect())
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    /// Creates a new account with a zero balance
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        self.writer
            .exec(move |conn| {
                let now = Utc::now().naive_utc();
                let account_db = AccountDB {
                    id: new_account
                        .id
                        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                    currency: new_account.currency,
                    balance: Decimal::ZERO.to_string(),
                    created_at: now,
                    updated_at: now,
                };

                diesel::insert_into(accounts::table)
                    .values(&account_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(account_db.into())
            })
            .await
    }

    /// Upserts an account by id: inserts if absent, otherwise updates the
    /// mutable fields (balance). Currency is immutable after creation and is
    /// not touched on the update path.
    async fn save(&self, account: Account) -> Result<Account> {
        self.writer
            .exec(move |conn| {
                let now = Utc::now().naive_utc();
                let mut account_db = AccountDB::from(&account);
                account_db.updated_at = now;

                diesel::insert_into(accounts::table)
                    .values(&account_db)
                    .on_conflict(accounts::id)
                    .do_update()
                    .set((
                        accounts::balance.eq(account_db.balance.clone()),
                        accounts::updated_at.eq(account_db.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(account_db.into())
            })
            .await
    }

    /// Retrieves an account by its ID
    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let account = accounts::table
            .select(AccountDB::as_select())
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Account {} not found",
                    account_id
                )))
            })?;

        Ok(account.into())
    }

    /// Lists all accounts, ordered by currency, then balance descending.
    ///
    /// Balances are TEXT in SQLite, so ordering them there would be
    /// lexicographic; the sort happens here on the parsed decimals instead.
    fn list(&self) -> Result<Vec<Account>> {
        let mut accounts_list = self.load_all()?;
        accounts_list.sort_by(|a, b| {
            a.currency
                .cmp(&b.currency)
                .then_with(|| b.balance.cmp(&a.balance))
        });
        Ok(accounts_list)
    }

    /// Lists accounts holding the given currency, excluding the given account
    fn list_by_currency_excluding(
        &self,
        account_id: &str,
        currency: &str,
    ) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let results = accounts::table
            .filter(accounts::currency.eq(currency))
            .filter(accounts::id.ne(account_id))
            .select(AccountDB::as_select())
            .load::<AccountDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Account::from).collect())
    }

    /// For each currency, the account(s) holding the maximum balance; ties
    /// return all tied accounts. Aggregated on parsed decimals for the same
    /// reason `list` sorts here.
    fn max_balance_per_currency(&self) -> Result<Vec<Account>> {
        let mut accounts_list = self.load_all()?;

        let mut max_per_currency: std::collections::HashMap<String, Decimal> =
            std::collections::HashMap::new();
        for account in &accounts_list {
            max_per_currency
                .entry(account.currency.clone())
                .and_modify(|max| {
                    if account.balance > *max {
                        *max = account.balance;
                    }
                })
                .or_insert(account.balance);
        }

        accounts_list.retain(|account| max_per_currency[&account.currency] == account.balance);
        accounts_list.sort_by(|a, b| a.currency.cmp(&b.currency));
        Ok(accounts_list)
    }

    /// Deletes an account by its ID and returns the number of deleted records
    async fn delete(&self, account_id: &str) -> Result<usize> {
        let id_to_delete = account_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(accounts::table.find(id_to_delete))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    /// Deletes all accounts
    async fn delete_all(&self) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                diesel::delete(accounts::table)
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
