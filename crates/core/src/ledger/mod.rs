//! Ledger engine - applies transfers and deposits.
//!
//! The engine is the only component with business rules: it decides how an
//! operation changes account balances and produces the immutable transaction
//! record. Persistence and atomicity are delegated to the ledger repository,
//! which must commit the balance changes and the log append as one unit.

mod ledger_model;
mod ledger_service;
mod ledger_traits;



// Re-export the public interface
pub use ledger_model::{compute_balance_changes, BalanceChange, LedgerOperation};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
