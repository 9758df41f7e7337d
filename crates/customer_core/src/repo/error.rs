//! Repository-level error type.
//!
//! # Invariants
//! - Every storage failure crossing a repository boundary becomes exactly
//!   one `RepositoryError`, with the original failure kept as `source`.
//! - "Row not found" is never represented here.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepositoryError>;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Failure of a repository operation.
///
/// Callers cannot distinguish anything finer than "the operation failed";
/// the cause chain is there for diagnostics only.
#[derive(Debug)]
pub struct RepositoryError {
    message: Option<String>,
    cause: Option<Cause>,
}

impl RepositoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
        }
    }

    pub fn from_cause(cause: impl Into<Cause>) -> Self {
        Self {
            message: None,
            cause: Some(cause.into()),
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
        }
    }

    /// Explicit message, if one was given at construction.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Display for RepositoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.message, &self.cause) {
            (Some(message), _) => write!(f, "{message}"),
            (None, Some(cause)) => write!(f, "{cause}"),
            (None, None) => write!(f, "repository operation failed"),
        }
    }
}

impl Error for RepositoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(value: rusqlite::Error) -> Self {
        Self::from_cause(value)
    }
}

impl From<DbError> for RepositoryError {
    fn from(value: DbError) -> Self {
        Self::from_cause(value)
    }
}

#[cfg(test)]
mod tests {
    use super::RepositoryError;
    use std::error::Error;

    #[test]
    fn display_prefers_message_over_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");

        let with_message = RepositoryError::with_cause("save failed", cause);
        assert_eq!(with_message.to_string(), "save failed");
        assert_eq!(
            with_message.source().map(|err| err.to_string()).as_deref(),
            Some("disk gone")
        );

        let cause_only =
            RepositoryError::from_cause(std::io::Error::new(std::io::ErrorKind::Other, "locked"));
        assert_eq!(cause_only.to_string(), "locked");
        assert!(cause_only.message().is_none());
    }

    #[test]
    fn message_only_error_has_no_source() {
        let err = RepositoryError::new("no connection");
        assert_eq!(err.to_string(), "no connection");
        assert!(err.source().is_none());
    }

    #[test]
    fn sqlite_errors_convert_with_cause() {
        let err: RepositoryError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.source().is_some());
        assert!(err.message().is_none());
    }
}
