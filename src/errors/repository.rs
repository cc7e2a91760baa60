//! Errors raised by the data-access layer.

use mongodb::error::ErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Failures surfaced by [`UserRepository`](crate::repositories::UserRepository).
///
/// Logical no-ops (unknown id, unknown field, empty collection) are never
/// reported through this type; they come back as `false`, `0` or an empty
/// list.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database request failed: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("invalid field name '{field}': {reason}")]
    InvalidFieldName { field: String, reason: &'static str },

    #[error("invalid value for field '{field}': expected {expected}")]
    InvalidFieldValue {
        field: String,
        expected: &'static str,
    },

    #[error("storage returned an inserted id that is not an ObjectId")]
    MissingInsertedId,
}

impl RepositoryError {
    /// Whether the failure means the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        match self {
            RepositoryError::Database(err) => matches!(
                *err.kind,
                ErrorKind::ServerSelection { .. }
                    | ErrorKind::Io(_)
                    | ErrorKind::ConnectionPoolCleared { .. }
            ),
            _ => false,
        }
    }
}
