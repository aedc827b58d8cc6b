use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;

use crate::db::WriteHandle;
use crate::errors::StorageError;
use crate::schema::{accounts, transactions};
use crate::transactions::TransactionDB;

use ledger_core::accounts::Account;
use ledger_core::errors::{DatabaseError, Error, Result};
use ledger_core::ledger::{compute_balance_changes, LedgerOperation, LedgerRepositoryTrait};
use ledger_core::transactions::Transaction;

use crate::accounts::AccountDB;

/// Applies ledger operations as one atomic unit.
///
/// Every `apply` runs as a single job on the writer actor, i.e. inside one
/// immediate transaction: the balance reads, the balance updates, and the
/// log append either all commit or all roll back. Because the actor
/// processes jobs serially, two concurrent applies debiting the same account
/// see each other's committed balances and can never lose an update.
pub struct LedgerRepository {
    writer: WriteHandle,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository instance
    pub fn new(writer: WriteHandle) -> Self {
        Self { writer }
    }
}

fn load_account(conn: &mut SqliteConnection, account_id: &str) -> Result<Account> {
    let account_db = accounts::table
        .select(AccountDB::as_select())
        .find(account_id)
        .first::<AccountDB>(conn)
        .optional()
        .map_err(StorageError::from)?
        .ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "Account {} not found",
                account_id
            )))
        })?;
    Ok(account_db.into())
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    async fn apply(&self, operation: LedgerOperation) -> Result<Transaction> {
        self.writer
            .exec(move |conn| {
                // Balances are read inside the transaction, so the
                // insufficient-funds check cannot race with another apply.
                let source = load_account(conn, operation.source_account_id())?;
                let target = match &operation {
                    LedgerOperation::Deposit { .. } => source.clone(),
                    LedgerOperation::Transfer { target_id, .. } => load_account(conn, target_id)?,
                };

                // Currency is snapshotted from the source account before any
                // mutation is persisted.
                let record = operation.to_transaction(source.currency.clone());
                let changes = compute_balance_changes(&operation, &source, &target)?;

                // Source first for transfers; the per-account order is part
                // of the observable contract.
                let now = Utc::now().naive_utc();
                for change in &changes {
                    diesel::update(accounts::table.find(&change.account_id))
                        .set((
                            accounts::balance.eq(change.new_balance.to_string()),
                            accounts::updated_at.eq(now),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                diesel::insert_into(transactions::table)
                    .values(&TransactionDB::from(&record))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                debug!(
                    "Applied ledger operation {}: {} -> {} amount {}",
                    record.id,
                    record.source_account_id,
                    record.target_account_id,
                    record.balance_brutto
                );

                Ok(record)
            })
            .await
    }
}
