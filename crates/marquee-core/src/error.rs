//! Error taxonomy shared by every catalog backend

use thiserror::Error;

/// Classified failure of a catalog operation.
///
/// Backends map known constraint violations onto the dedicated variants and
/// pass everything else through as [`CatalogError::Storage`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// `(first_name, last_name)` already taken
    #[error("Person already exists: {first_name} {last_name}")]
    DuplicatePerson {
        first_name: String,
        last_name: String,
    },

    /// The movie/person pair is already linked
    #[error("Person {person_id} already linked to movie {movie_id}")]
    DuplicateLink { movie_id: i64, person_id: i64 },

    /// A referenced movie or person does not exist
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// The addressed row does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Opaque engine failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
