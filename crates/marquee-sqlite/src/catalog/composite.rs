//! Multi-statement writes
//!
//! Each function takes a [`Transaction`] so a failing step rolls back every
//! step before it.

use marquee_core::{NewMovie, NewPerson, RoleAssignment, RoleUpdate};
use rusqlite::Transaction;
use tracing::debug;

use super::{link, movie, person, role};
use crate::error::SqliteResult;

/// Person, then role record, then the optional link
pub fn create_person(
    tx: &Transaction<'_>,
    new_person: &NewPerson,
    assignment: &RoleAssignment,
    movie_id: Option<i64>,
) -> SqliteResult<i64> {
    let person_id = person::insert_person(tx, new_person)?;
    role::insert_role_record(tx, person_id, assignment)?;

    if let Some(movie_id) = movie_id {
        link::link_movie_person(tx, movie_id, person_id)?;
    }

    debug!(person_id, kind = %assignment.kind, ?movie_id, "Created person");
    Ok(person_id)
}

/// Person, role record, movie, link. Returns `(movie_id, person_id)`.
pub fn create_movie_with_person(
    tx: &Transaction<'_>,
    new_movie: &NewMovie,
    new_person: &NewPerson,
    assignment: &RoleAssignment,
) -> SqliteResult<(i64, i64)> {
    let person_id = person::insert_person(tx, new_person)?;
    role::insert_role_record(tx, person_id, assignment)?;
    let movie_id = movie::insert_movie(tx, new_movie)?;
    link::link_movie_person(tx, movie_id, person_id)?;

    Ok((movie_id, person_id))
}

/// Person row, then the role record when one of that kind exists
pub fn update_person(
    tx: &Transaction<'_>,
    person_id: i64,
    new_person: &NewPerson,
    update: Option<&RoleUpdate>,
) -> SqliteResult<bool> {
    person::update_person(tx, person_id, new_person)?;

    match update {
        Some(update) => role::update_role_record(tx, person_id, update),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqliteError;
    use crate::SqlitePool;
    use marquee_core::RoleKind;

    fn count(pool: &SqlitePool, table: &str) -> i64 {
        pool.with_connection(|conn| {
            Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?)
        })
        .unwrap()
    }

    #[test]
    fn test_failed_link_rolls_back_person_and_role() {
        let pool = SqlitePool::memory().unwrap();

        let err = pool
            .with_transaction(|tx| {
                create_person(
                    tx,
                    &NewPerson::new("Paul", "Dano", 10),
                    &RoleAssignment::new(RoleKind::Actor, "Riddler"),
                    Some(404),
                )
            })
            .unwrap_err();

        assert!(matches!(err, SqliteError::ForeignKey(_)));
        assert_eq!(count(&pool, "person"), 0);
        assert_eq!(count(&pool, "actor"), 0);
    }

    #[test]
    fn test_create_movie_with_person_links_both() {
        let pool = SqlitePool::memory().unwrap();

        let (movie_id, person_id) = pool
            .with_transaction(|tx| {
                create_movie_with_person(
                    tx,
                    &NewMovie::titled("Lady Bird"),
                    &NewPerson::new("Greta", "Gerwig", 700),
                    &RoleAssignment::new(RoleKind::Director, "Director"),
                )
            })
            .unwrap();

        let links = pool.with_connection(link::list_links).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].movie_id, movie_id);
        assert_eq!(links[0].person_id, person_id);
    }

    #[test]
    fn test_duplicate_person_rolls_back_movie() {
        let pool = SqlitePool::memory().unwrap();
        pool.with_connection(|conn| person::insert_person(conn, &NewPerson::new("A", "B", 1)))
            .unwrap();

        let err = pool
            .with_transaction(|tx| {
                create_movie_with_person(
                    tx,
                    &NewMovie::titled("Never Saved"),
                    &NewPerson::new("A", "B", 2),
                    &RoleAssignment::new(RoleKind::Writer, "draft"),
                )
            })
            .unwrap_err();

        assert!(matches!(err, SqliteError::DuplicatePerson { .. }));
        assert_eq!(count(&pool, "movie"), 0);
        assert_eq!(count(&pool, "writer"), 0);
    }
}
