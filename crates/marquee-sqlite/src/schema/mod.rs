//! Schema management
//!
//! The catalog schema is fixed. Everything is declared with
//! `IF NOT EXISTS`, so applying it repeatedly is harmless; the version row
//! only records that the schema has been laid down.

use crate::error::{SqliteError, SqliteResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

/// Schema version - increment when making schema changes
pub const SCHEMA_VERSION: i32 = 1;

/// Create the catalog tables if they are missing
pub fn apply_migrations(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking schema");

    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply v1 schema: {}", e)))?;

    if current_version < SCHEMA_VERSION {
        conn.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [SCHEMA_VERSION],
        )?;
        info!(from = current_version, to = SCHEMA_VERSION, "Catalog schema created");
    }

    Ok(())
}

/// Highest recorded schema version, 0 for a fresh database
pub fn current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: Option<i32> = conn
        .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();

    Ok(version.unwrap_or(0))
}

const SCHEMA_V1: &str = r#"
-- ============================================================================
-- TABLE: movie
-- ============================================================================

CREATE TABLE IF NOT EXISTS movie (
    movie_id     INTEGER PRIMARY KEY,
    title        TEXT NOT NULL,
    release_date TEXT,              -- YYYY-MM-DD
    synopsis     TEXT,
    rating       INTEGER,
    run_time     INTEGER,           -- minutes
    category     TEXT
);

-- ============================================================================
-- TABLE: person
-- ============================================================================

CREATE TABLE IF NOT EXISTS person (
    person_id  INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    pay        INTEGER NOT NULL,
    UNIQUE (first_name, last_name)
);

-- ============================================================================
-- Role tables: one per role kind, each with its own descriptive column
-- ============================================================================

CREATE TABLE IF NOT EXISTS actor (
    actor_id  INTEGER PRIMARY KEY,
    person_id INTEGER NOT NULL REFERENCES person(person_id),
    role      TEXT
);

CREATE TABLE IF NOT EXISTS actress (
    actress_id INTEGER PRIMARY KEY,
    person_id  INTEGER NOT NULL REFERENCES person(person_id),
    role       TEXT
);

CREATE TABLE IF NOT EXISTS writer (
    writer_id    INTEGER PRIMARY KEY,
    person_id    INTEGER NOT NULL REFERENCES person(person_id),
    contribution TEXT
);

CREATE TABLE IF NOT EXISTS director (
    director_id INTEGER PRIMARY KEY,
    person_id   INTEGER NOT NULL REFERENCES person(person_id),
    position    TEXT
);

CREATE TABLE IF NOT EXISTS producer (
    producer_id INTEGER PRIMARY KEY,
    person_id   INTEGER NOT NULL REFERENCES person(person_id),
    position    TEXT
);

CREATE INDEX IF NOT EXISTS idx_actor_person ON actor(person_id);
CREATE INDEX IF NOT EXISTS idx_actress_person ON actress(person_id);
CREATE INDEX IF NOT EXISTS idx_writer_person ON writer(person_id);
CREATE INDEX IF NOT EXISTS idx_director_person ON director(person_id);
CREATE INDEX IF NOT EXISTS idx_producer_person ON producer(person_id);

-- ============================================================================
-- TABLE: movie_person
-- ============================================================================
-- Role-independent link between a movie and a person

CREATE TABLE IF NOT EXISTS movie_person (
    movie_id  INTEGER NOT NULL REFERENCES movie(movie_id),
    person_id INTEGER NOT NULL REFERENCES person(person_id),
    PRIMARY KEY (movie_id, person_id)
);

CREATE INDEX IF NOT EXISTS idx_movie_person_person ON movie_person(person_id);
"#;
