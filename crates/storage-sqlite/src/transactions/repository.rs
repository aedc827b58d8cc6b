use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::transactions;

use ledger_core::errors::{DatabaseError, Error, Result};
use ledger_core::transactions::{Transaction, TransactionRepositoryTrait};

use super::model::TransactionDB;

/// Repository for reading and administering the transaction log.
///
/// Appending goes through the ledger repository, inside the same atomic unit
/// as the balance updates; this repository never inserts.
pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    /// Retrieves a transaction by its ID
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;

        let transaction_db = transactions::table
            .select(TransactionDB::as_select())
            .find(transaction_id)
            .first::<TransactionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Transaction {} not found",
                    transaction_id
                )))
            })?;

        Ok(transaction_db.into())
    }

    /// Lists all transactions, oldest first
    fn get_all(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let results = transactions::table
            .select(TransactionDB::as_select())
            .order(transactions::created_at.asc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Transaction::from).collect())
    }

    /// Lists the transactions referencing the account as source or target,
    /// most-recent-first
    fn get_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let results = transactions::table
            .filter(
                transactions::source_account
                    .eq(account_id)
                    .or(transactions::target_account.eq(account_id)),
            )
            .select(TransactionDB::as_select())
            .order(transactions::created_at.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Transaction::from).collect())
    }

    /// Deletes a transaction by its ID and returns the number of deleted
    /// records
    async fn delete(&self, transaction_id: &str) -> Result<usize> {
        let id_to_delete = transaction_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(transactions::table.find(id_to_delete))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    /// Deletes all transactions
    async fn delete_all(&self) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                diesel::delete(transactions::table)
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
