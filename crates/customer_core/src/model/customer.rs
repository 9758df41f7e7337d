//! Customer domain model.
//!
//! # Responsibility
//! - Define the in-memory shape of one `CUSTOMER` row.
//! - Guard the one-time assignment of the storage identity.
//!
//! # Invariants
//! - `id` transitions at most once, from `None` to `Some`.
//! - Equality and hashing cover all six fields, `id` included.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned primary key (SQLite rowid).
pub type CustomerId = i64;

/// Invariant violations raised by `Customer` mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerError {
    /// `set_id` was called on a customer that already has an identity.
    IdAlreadyAssigned { current: CustomerId },
}

impl Display for CustomerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdAlreadyAssigned { current } => {
                write!(f, "invalid operation: customer id {current} cannot be reassigned")
            }
        }
    }
}

impl Error for CustomerError {}

/// One customer's identifying data.
///
/// Every string field is nullable to mirror the table columns; an unset field
/// is persisted as `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    id: Option<CustomerId>,
    legal_identifier: Option<String>,
    name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
}

impl Customer {
    /// Creates a transient customer with no id and no field values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<CustomerId> {
        self.id
    }

    /// Assigns the storage identity.
    ///
    /// # Errors
    /// - `CustomerError::IdAlreadyAssigned` when an id is already present,
    ///   regardless of the new value.
    pub fn set_id(&mut self, id: CustomerId) -> Result<(), CustomerError> {
        if let Some(current) = self.id {
            return Err(CustomerError::IdAlreadyAssigned { current });
        }
        self.id = Some(id);
        Ok(())
    }

    pub fn legal_identifier(&self) -> Option<&str> {
        self.legal_identifier.as_deref()
    }

    pub fn set_legal_identifier(&mut self, value: impl Into<String>) {
        self.legal_identifier = Some(value.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = Some(value.into());
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = Some(value.into());
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = Some(value.into());
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, value: impl Into<String>) {
        self.phone_number = Some(value.into());
    }

    /// Rebuilds a customer from persisted column values.
    pub(crate) fn from_row_values(
        id: CustomerId,
        legal_identifier: Option<String>,
        name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            legal_identifier,
            name,
            last_name,
            email,
            phone_number,
        }
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn field(value: Option<&str>) -> &str {
            value.unwrap_or("null")
        }

        let id = self
            .id
            .map_or_else(|| "null".to_string(), |id| id.to_string());
        write!(
            f,
            "Customer [id={id}, legalIdentifier={}, name={}, lastName={}, email={}, phoneNumber={}]",
            field(self.legal_identifier()),
            field(self.name()),
            field(self.last_name()),
            field(self.email()),
            field(self.phone_number()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, CustomerError};

    #[test]
    fn set_id_rejects_same_value_once_assigned() {
        let mut customer = Customer::new();
        customer.set_id(7).unwrap();

        let err = customer.set_id(7).unwrap_err();
        assert_eq!(err, CustomerError::IdAlreadyAssigned { current: 7 });
        assert_eq!(customer.id(), Some(7));
    }

    #[test]
    fn display_renders_unset_fields_as_null() {
        let mut customer = Customer::new();
        customer.set_name("Michael");

        assert_eq!(
            customer.to_string(),
            "Customer [id=null, legalIdentifier=null, name=Michael, lastName=null, email=null, phoneNumber=null]"
        );
    }
}
