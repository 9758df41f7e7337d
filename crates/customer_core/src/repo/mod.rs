//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the customer data-access contract.
//! - Isolate SQLite statement details from callers.
//!
//! # Invariants
//! - Repository APIs surface storage failures as `RepositoryError` only.
//! - Lookups report absence with `None`, never with an error.

pub mod customer_repo;
pub mod error;
