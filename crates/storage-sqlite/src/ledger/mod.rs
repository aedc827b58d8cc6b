//! Ledger apply repository - SQLite implementation.

mod repository;

pub use repository::LedgerRepository;
