//! Error types for SQLite storage

use marquee_core::CatalogError;
use rusqlite::ffi;
use rusqlite::ErrorCode;
use thiserror::Error;

/// SQLite storage error type
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema/migration error
    #[error("Schema error: {0}")]
    Schema(String),

    /// `(first_name, last_name)` uniqueness violated
    #[error("Person already exists: {first_name} {last_name}")]
    DuplicatePerson {
        first_name: String,
        last_name: String,
    },

    /// `movie_person` primary key violated
    #[error("Person {person_id} already linked to movie {movie_id}")]
    DuplicateLink { movie_id: i64, person_id: i64 },

    /// A referenced row does not exist
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored data could not be decoded
    #[error("Corrupt row: {0}")]
    Corrupt(String),

    /// Blocking task failed to complete
    #[error("Task error: {0}")]
    Task(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for SQLite operations
pub type SqliteResult<T> = Result<T, SqliteError>;

/// Extended result code of a constraint failure, if `err` is one
fn constraint_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            Some(e.extended_code)
        }
        _ => None,
    }
}

/// UNIQUE or PRIMARY KEY violation
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        constraint_code(err),
        Some(ffi::SQLITE_CONSTRAINT_UNIQUE) | Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    )
}

pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    constraint_code(err) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}

/// Decode failures become `Corrupt`; everything else passes through
pub(crate) fn from_row_error(err: rusqlite::Error) -> SqliteError {
    match err {
        rusqlite::Error::FromSqlConversionFailure(column, _, source) => {
            SqliteError::Corrupt(format!("column {column}: {source}"))
        }
        rusqlite::Error::InvalidColumnType(column, name, ty) => {
            SqliteError::Corrupt(format!("column {column} ({name}) holds {ty}"))
        }
        other => SqliteError::Rusqlite(other),
    }
}

impl From<SqliteError> for CatalogError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::DuplicatePerson {
                first_name,
                last_name,
            } => Self::DuplicatePerson {
                first_name,
                last_name,
            },
            SqliteError::DuplicateLink {
                movie_id,
                person_id,
            } => Self::DuplicateLink {
                movie_id,
                person_id,
            },
            SqliteError::ForeignKey(msg) => Self::ForeignKeyViolation(msg),
            SqliteError::NotFound(msg) => Self::NotFound(msg),
            SqliteError::Connection(msg)
            | SqliteError::Schema(msg)
            | SqliteError::Corrupt(msg)
            | SqliteError::Task(msg) => Self::Storage(msg),
            SqliteError::Rusqlite(e) => Self::Storage(e.to_string()),
        }
    }
}
