//! Domain model for the customer data-access core.
//!
//! # Responsibility
//! - Define the canonical record mapped to and from `CUSTOMER` rows.
//!
//! # Invariants
//! - Identity is assigned by storage and never reassigned in memory.

pub mod customer;
