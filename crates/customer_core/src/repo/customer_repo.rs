//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map the four `CUSTOMER` statements to and from `Customer` values.
//! - Translate every storage failure into `RepositoryError`.
//!
//! # Invariants
//! - One connection is retained per repository; no operation closes it.
//! - Prepared statements live only for the duration of one call.
//! - `save` never writes the generated id back into its input.

use crate::db::ConnectionProvider;
use crate::model::customer::{Customer, CustomerId};
use crate::repo::error::{RepoResult, RepositoryError};
use log::{debug, error};
use rusqlite::{params, Connection, Row};
use std::borrow::Borrow;
use std::time::Instant;

const SELECT_BY_ID_SQL: &str = "SELECT * FROM CUSTOMER WHERE ID = ?1";
const SELECT_ALL_SQL: &str = "SELECT * FROM CUSTOMER";
const INSERT_SQL: &str =
    "INSERT INTO CUSTOMER (LEGAL_IDENTIFIER, NAME, LASTNAME, EMAIL, PHONE) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_BY_ID_SQL: &str = "DELETE FROM CUSTOMER WHERE ID = ?1";

/// Repository interface for customer CRUD operations.
pub trait CustomerRepository {
    /// Looks up one customer by primary key. `Ok(None)` when no row matches.
    fn get(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
    /// Returns every stored customer in engine order.
    fn list(&self) -> RepoResult<Vec<Customer>>;
    /// Inserts the non-id fields and returns the generated key.
    fn save(&self, customer: &Customer) -> RepoResult<CustomerId>;
    /// Removes the row with this key. Missing rows are not an error.
    fn delete(&self, id: CustomerId) -> RepoResult<()>;
}

/// SQLite-backed customer repository.
///
/// `C` is either an owned `Connection` or a borrowed `&Connection`; the latter
/// lets callers run the repository inside their own transaction.
pub struct SqliteCustomerRepository<C = Connection> {
    conn: C,
}

impl<C: Borrow<Connection>> SqliteCustomerRepository<C> {
    /// Wraps a ready, migrated connection.
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        self.conn.borrow()
    }

    /// Releases the retained connection back to the caller.
    pub fn into_connection(self) -> C {
        self.conn
    }
}

impl SqliteCustomerRepository<Connection> {
    /// Eagerly acquires one connection from `provider` and keeps it for the
    /// repository's lifetime.
    ///
    /// # Errors
    /// - `RepositoryError` wrapping the provider failure.
    pub fn from_provider(provider: &impl ConnectionProvider) -> RepoResult<Self> {
        match provider.connection() {
            Ok(conn) => Ok(Self::new(conn)),
            Err(err) => {
                error!(
                    "event=repo_connect module=repo status=error error_code=connection_unavailable error={}",
                    err
                );
                Err(RepositoryError::with_cause(
                    "failed to acquire repository connection",
                    err,
                ))
            }
        }
    }
}

impl<C: Borrow<Connection>> CustomerRepository for SqliteCustomerRepository<C> {
    fn get(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let started_at = Instant::now();
        let result = select_by_id(self.connection(), id);
        log_outcome("customer_get", started_at, &result);
        result
    }

    fn list(&self) -> RepoResult<Vec<Customer>> {
        let started_at = Instant::now();
        let result = select_all(self.connection());
        log_outcome("customer_list", started_at, &result);
        result
    }

    fn save(&self, customer: &Customer) -> RepoResult<CustomerId> {
        if customer.id().is_some() {
            debug!("event=customer_save module=repo status=start note=input_id_ignored");
        }

        let started_at = Instant::now();
        let result = insert(self.connection(), customer);
        log_outcome("customer_save", started_at, &result);
        result
    }

    fn delete(&self, id: CustomerId) -> RepoResult<()> {
        let started_at = Instant::now();
        let result = delete_by_id(self.connection(), id);
        log_outcome("customer_delete", started_at, &result);
        result
    }
}

fn select_by_id(conn: &Connection, id: CustomerId) -> RepoResult<Option<Customer>> {
    let mut stmt = conn.prepare(SELECT_BY_ID_SQL)?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_customer_row(row)?));
    }

    Ok(None)
}

fn select_all(conn: &Connection) -> RepoResult<Vec<Customer>> {
    let mut stmt = conn.prepare(SELECT_ALL_SQL)?;
    let mut rows = stmt.query([])?;
    let mut customers = Vec::new();

    while let Some(row) = rows.next()? {
        customers.push(parse_customer_row(row)?);
    }

    Ok(customers)
}

fn insert(conn: &Connection, customer: &Customer) -> RepoResult<CustomerId> {
    let mut stmt = conn.prepare(INSERT_SQL)?;
    let id = stmt.insert(params![
        customer.legal_identifier(),
        customer.name(),
        customer.last_name(),
        customer.email(),
        customer.phone_number(),
    ])?;

    Ok(id)
}

fn delete_by_id(conn: &Connection, id: CustomerId) -> RepoResult<()> {
    let mut stmt = conn.prepare(DELETE_BY_ID_SQL)?;
    stmt.execute([id])?;
    Ok(())
}

// Column lookup by name is case-insensitive in rusqlite.
fn parse_customer_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer::from_row_values(
        row.get("id")?,
        row.get("legal_identifier")?,
        row.get("name")?,
        row.get("lastname")?,
        row.get("email")?,
        row.get("phone")?,
    ))
}

fn log_outcome<T>(event: &str, started_at: Instant, result: &RepoResult<T>) {
    match result {
        Ok(_) => debug!(
            "event={event} module=repo status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=repo status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
}
