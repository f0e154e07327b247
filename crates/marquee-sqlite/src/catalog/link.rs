//! Movie-person link statements

use marquee_core::MovieLink;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::{is_foreign_key_violation, is_unique_violation, SqliteError, SqliteResult};

/// Insert a `movie_person` row.
///
/// An existing pair is `DuplicateLink`; an id that references no row is
/// `ForeignKey`.
pub fn link_movie_person(conn: &Connection, movie_id: i64, person_id: i64) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO movie_person (movie_id, person_id) VALUES (?1, ?2)",
        params![movie_id, person_id],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            SqliteError::DuplicateLink {
                movie_id,
                person_id,
            }
        } else if is_foreign_key_violation(&e) {
            SqliteError::ForeignKey(format!(
                "Invalid movie_id {} or person_id {}",
                movie_id, person_id
            ))
        } else {
            SqliteError::Rusqlite(e)
        }
    })?;

    debug!(movie_id, person_id, "Linked person to movie");
    Ok(())
}

/// Remove a link if present
pub fn unlink_movie_person(conn: &Connection, movie_id: i64, person_id: i64) -> SqliteResult<()> {
    let rows = conn.execute(
        "DELETE FROM movie_person WHERE movie_id = ?1 AND person_id = ?2",
        params![movie_id, person_id],
    )?;

    debug!(movie_id, person_id, removed = rows, "Unlinked person from movie");
    Ok(())
}

pub fn list_links(conn: &Connection) -> SqliteResult<Vec<MovieLink>> {
    let mut stmt = conn.prepare("SELECT movie_id, person_id FROM movie_person ORDER BY rowid")?;
    let links = stmt
        .query_map([], |row| {
            Ok(MovieLink {
                movie_id: row.get(0)?,
                person_id: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(links)
}

pub(crate) fn delete_links_for_movie(conn: &Connection, movie_id: i64) -> SqliteResult<usize> {
    Ok(conn.execute("DELETE FROM movie_person WHERE movie_id = ?1", [movie_id])?)
}

pub(crate) fn delete_links_for_person(conn: &Connection, person_id: i64) -> SqliteResult<usize> {
    Ok(conn.execute("DELETE FROM movie_person WHERE person_id = ?1", [person_id])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqlitePool;

    fn seeded() -> SqlitePool {
        let pool = SqlitePool::memory().unwrap();
        pool.with_connection(|conn| {
            conn.execute_batch(
                "INSERT INTO movie (movie_id, title) VALUES (1, 'Alien');
                 INSERT INTO person (person_id, first_name, last_name, pay) VALUES (1, 'Sigourney', 'Weaver', 100);",
            )?;
            Ok(())
        })
        .unwrap();
        pool
    }

    #[test]
    fn test_duplicate_link_is_classified() {
        let pool = seeded();
        pool.with_connection(|conn| link_movie_person(conn, 1, 1)).unwrap();

        let err = pool
            .with_connection(|conn| link_movie_person(conn, 1, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            SqliteError::DuplicateLink {
                movie_id: 1,
                person_id: 1
            }
        ));

        let links = pool.with_connection(list_links).unwrap();
        assert_eq!(links, vec![MovieLink { movie_id: 1, person_id: 1 }]);
    }

    #[test]
    fn test_missing_reference_is_foreign_key() {
        let pool = seeded();
        let err = pool
            .with_connection(|conn| link_movie_person(conn, 1, 99))
            .unwrap_err();
        assert!(matches!(err, SqliteError::ForeignKey(_)));

        let err = pool
            .with_connection(|conn| link_movie_person(conn, 99, 1))
            .unwrap_err();
        assert!(matches!(err, SqliteError::ForeignKey(_)));
    }

    #[test]
    fn test_unlink_is_idempotent() {
        let pool = seeded();
        pool.with_connection(|conn| link_movie_person(conn, 1, 1)).unwrap();

        pool.with_connection(|conn| unlink_movie_person(conn, 1, 1)).unwrap();
        pool.with_connection(|conn| unlink_movie_person(conn, 1, 1)).unwrap();

        assert!(pool.with_connection(list_links).unwrap().is_empty());
    }
}
