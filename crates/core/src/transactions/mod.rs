//! Transactions module - the immutable transaction log.

mod transactions_model;
mod transactions_service;
mod transactions_traits;


// Re-export the public interface
pub use transactions_model::{balance_history, Transaction, TransactionStatus};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
