//! Shared test harness: a fully wired ledger on a temp-file database.

use std::sync::Arc;

use ledger_core::accounts::AccountService;
use ledger_core::ledger::LedgerService;
use ledger_core::transactions::TransactionService;
use ledger_storage_sqlite::accounts::AccountRepository;
use ledger_storage_sqlite::ledger::LedgerRepository;
use ledger_storage_sqlite::transactions::TransactionRepository;
use ledger_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

pub struct TestLedger {
    // Held so the database file outlives the test.
    _dir: tempfile::TempDir,
    pub accounts: Arc<AccountService>,
    pub transactions: Arc<TransactionService>,
    pub ledger: Arc<LedgerService>,
}

/// Wires up a fresh database, pool, writer actor, and all three services.
/// Must be called from within a tokio runtime (the writer actor is a
/// spawned task).
pub fn setup() -> TestLedger {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("ledger.db");
    let db_path = db_path.to_str().expect("temp path is not valid UTF-8");

    init(db_path).expect("db init failed");
    let pool = create_pool(db_path).expect("pool creation failed");
    run_migrations(&pool).expect("migrations failed");
    let writer = spawn_writer((*pool).clone());

    let account_repository = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let ledger_repository = Arc::new(LedgerRepository::new(writer));

    TestLedger {
        _dir: dir,
        accounts: Arc::new(AccountService::new(account_repository)),
        transactions: Arc::new(TransactionService::new(transaction_repository)),
        ledger: Arc::new(LedgerService::new(ledger_repository)),
    }
}
