//! Account repository - SQLite implementation.

mod model;
mod repository;

pub use model::AccountDB;
pub use repository::AccountRepository;

pub(crate) use model::parse_stored_decimal;
