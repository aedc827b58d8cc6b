//! Ledger Core - domain entities, services, and traits.
//!
//! This crate contains the business logic for the ledger: accounts,
//! the immutable transaction log, and the engine that applies
//! transfers and deposits. It is database-agnostic and defines traits
//! that are implemented by the `ledger-storage-sqlite` crate.

pub mod accounts;
pub mod errors;
pub mod ledger;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
