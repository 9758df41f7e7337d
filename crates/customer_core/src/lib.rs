//! Customer data-access core.
//!
//! A `Customer` entity, its SQLite-backed repository, and the single
//! `RepositoryError` raised by every storage failure.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{ConnectionProvider, SqliteDataSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, CustomerError, CustomerId};
pub use repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
pub use repo::error::{RepoResult, RepositoryError};
