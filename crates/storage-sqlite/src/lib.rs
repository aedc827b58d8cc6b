//! SQLite storage implementation for the ledger.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `ledger-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for accounts, the transaction log, and the
//!   atomic ledger apply
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `ledger-core` is database-agnostic and works with traits.
//!
//! All writes are funneled through a single writer actor holding one
//! connection; each job runs inside an immediate transaction. The ledger
//! apply (two balance updates plus the log append) is therefore one atomic
//! unit, and concurrent applies against the same account are serialized
//! rather than interleaved.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod ledger;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from ledger-core for convenience
pub use ledger_core::errors::{DatabaseError, Error, Result};
