//! Connection sources for repositories.
//!
//! # Responsibility
//! - Abstract "where does a connection come from" behind one trait.
//! - Provide the SQLite file/in-memory source used by callers and tests.
//!
//! # Invariants
//! - Every connection handed out is bootstrapped (`open_db*`).

use super::{open_db, open_db_in_memory, DbResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Supplies ready-to-use connections.
pub trait ConnectionProvider {
    /// Acquires one connection. Ownership passes to the caller.
    fn connection(&self) -> DbResult<Connection>;
}

/// SQLite-backed connection source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqliteDataSource {
    /// Database file on disk, created on first open.
    File(PathBuf),
    /// Private in-memory database; every acquired connection is independent.
    InMemory,
}

impl SqliteDataSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn in_memory() -> Self {
        Self::InMemory
    }
}

impl ConnectionProvider for SqliteDataSource {
    fn connection(&self) -> DbResult<Connection> {
        match self {
            Self::File(path) => open_db(path),
            Self::InMemory => open_db_in_memory(),
        }
    }
}
