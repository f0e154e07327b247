//! Read-only lookups spanning several tables

use marquee_core::{CastMember, Movie, Person, RoleKind};
use rusqlite::{Connection, OptionalExtension};

use super::movie::{query_movies, MOVIE_COLUMNS};
use super::person::row_to_person;
use crate::error::SqliteResult;

/// Resolves one label per role row; precedence follows the CASE order.
const MOVIE_CAST_SQL: &str = r#"
    SELECT p.person_id, p.first_name, p.last_name, p.pay,
      CASE
        WHEN a.actor_id IS NOT NULL THEN 'Actor'
        WHEN ac.actress_id IS NOT NULL THEN 'Actress'
        WHEN d.director_id IS NOT NULL THEN 'Director'
        WHEN w.writer_id IS NOT NULL THEN 'Writer'
        WHEN pr.producer_id IS NOT NULL THEN 'Producer'
      END AS role_type,
      COALESCE(a.role, ac.role, d.position, w.contribution, pr.position) AS detail
    FROM movie_person mp
    JOIN person p ON mp.person_id = p.person_id
    LEFT JOIN actor a ON p.person_id = a.person_id
    LEFT JOIN actress ac ON p.person_id = ac.person_id
    LEFT JOIN director d ON p.person_id = d.person_id
    LEFT JOIN writer w ON p.person_id = w.person_id
    LEFT JOIN producer pr ON p.person_id = pr.person_id
    WHERE mp.movie_id = ?1
    ORDER BY mp.rowid
"#;

// Everyone on the producer's movies, the producer included, highest pay first.
const MOST_EXPENSIVE_SQL: &str = r#"
    SELECT p.person_id, p.first_name, p.last_name, p.pay
    FROM person p
    WHERE p.person_id IN (
        SELECT mp.person_id
        FROM movie_person mp
        WHERE mp.movie_id IN (
            SELECT own.movie_id
            FROM movie_person own
            JOIN producer pr ON pr.person_id = own.person_id
            WHERE pr.producer_id = ?1
        )
    )
    ORDER BY p.pay DESC, p.person_id ASC
    LIMIT 1
"#;

/// People attached to a movie with their resolved role label
pub fn movie_cast(conn: &Connection, movie_id: i64) -> SqliteResult<Vec<CastMember>> {
    let mut stmt = conn.prepare(MOVIE_CAST_SQL)?;
    let cast = stmt
        .query_map([movie_id], |row| {
            Ok(CastMember {
                person_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                pay: row.get(3)?,
                role_type: row.get(4)?,
                detail: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cast)
}

/// Movies linked to the person behind role record `record_id` of `kind`
pub fn movies_by_role(conn: &Connection, kind: RoleKind, record_id: i64) -> SqliteResult<Vec<Movie>> {
    let binding = kind.binding();
    let sql = format!(
        r#"
        SELECT {MOVIE_COLUMNS}
        FROM movie m
        JOIN movie_person mp ON m.movie_id = mp.movie_id
        JOIN {table} r ON r.person_id = mp.person_id
        WHERE r.{id} = ?1
        ORDER BY m.movie_id
        "#,
        table = binding.table,
        id = binding.id_column,
    );
    query_movies(conn, &sql, [record_id])
}

/// Movies whose release date's year component equals `year`
pub fn movies_by_year(conn: &Connection, year: i32) -> SqliteResult<Vec<Movie>> {
    let sql = format!(
        "SELECT {MOVIE_COLUMNS} FROM movie m \
         WHERE strftime('%Y', m.release_date) = ?1 ORDER BY m.movie_id"
    );
    query_movies(conn, &sql, [format!("{:04}", year)])
}

/// Highest paid person working on the movies of producer record `producer_id`
pub fn most_expensive_for_producer(
    conn: &Connection,
    producer_id: i64,
) -> SqliteResult<Option<Person>> {
    let person = conn
        .query_row(MOST_EXPENSIVE_SQL, [producer_id], row_to_person)
        .optional()?;
    Ok(person)
}
