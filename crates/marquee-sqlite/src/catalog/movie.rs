//! Movie statements

use chrono::NaiveDate;
use marquee_core::{Movie, NewMovie};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use tracing::debug;

use super::link;
use crate::error::{from_row_error, SqliteError, SqliteResult};

pub(crate) const MOVIE_COLUMNS: &str =
    "m.movie_id, m.title, m.release_date, m.synopsis, m.rating, m.run_time, m.category";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn insert_movie(conn: &Connection, movie: &NewMovie) -> SqliteResult<i64> {
    conn.execute(
        r#"
        INSERT INTO movie (title, release_date, synopsis, rating, run_time, category)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            movie.title,
            format_date(movie.release_date),
            movie.synopsis,
            movie.rating,
            movie.run_time,
            movie.category,
        ],
    )?;

    let movie_id = conn.last_insert_rowid();
    debug!(movie_id, title = %movie.title, "Inserted movie");
    Ok(movie_id)
}

pub fn get_movie(conn: &Connection, movie_id: i64) -> SqliteResult<Option<Movie>> {
    let movie = conn
        .query_row(
            &format!("SELECT {MOVIE_COLUMNS} FROM movie m WHERE m.movie_id = ?1"),
            [movie_id],
            row_to_movie,
        )
        .optional()
        .map_err(from_row_error)?;
    Ok(movie)
}

pub fn list_movies(conn: &Connection) -> SqliteResult<Vec<Movie>> {
    query_movies(
        conn,
        &format!("SELECT {MOVIE_COLUMNS} FROM movie m ORDER BY m.movie_id"),
        [],
    )
}

/// Replace every mutable column; `NotFound` when the id matches nothing
pub fn update_movie(conn: &Connection, movie_id: i64, movie: &NewMovie) -> SqliteResult<()> {
    let rows_affected = conn.execute(
        r#"
        UPDATE movie SET
            title = ?2,
            release_date = ?3,
            synopsis = ?4,
            rating = ?5,
            run_time = ?6,
            category = ?7
        WHERE movie_id = ?1
        "#,
        params![
            movie_id,
            movie.title,
            format_date(movie.release_date),
            movie.synopsis,
            movie.rating,
            movie.run_time,
            movie.category,
        ],
    )?;

    if rows_affected == 0 {
        return Err(SqliteError::NotFound(format!("Movie {} does not exist", movie_id)));
    }
    Ok(())
}

/// Delete a movie's links, then the movie row.
///
/// Taking a transaction means a failed link deletion can never leave the
/// movie row removed. Returns whether a movie row existed.
pub fn delete_movie(tx: &Transaction<'_>, movie_id: i64) -> SqliteResult<bool> {
    let links = link::delete_links_for_movie(tx, movie_id)?;
    let rows = tx.execute("DELETE FROM movie WHERE movie_id = ?1", [movie_id])?;

    debug!(movie_id, links, deleted = rows > 0, "Deleted movie");
    Ok(rows > 0)
}

/// Movies linked to a person
pub fn person_movies(conn: &Connection, person_id: i64) -> SqliteResult<Vec<Movie>> {
    query_movies(
        conn,
        &format!(
            r#"
            SELECT {MOVIE_COLUMNS}
            FROM movie_person mp
            JOIN movie m ON m.movie_id = mp.movie_id
            WHERE mp.person_id = ?1
            ORDER BY m.movie_id
            "#
        ),
        [person_id],
    )
}

pub(crate) fn query_movies<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> SqliteResult<Vec<Movie>> {
    let mut stmt = conn.prepare(sql)?;
    let movies = stmt
        .query_map(params, row_to_movie)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(from_row_error)?;
    Ok(movies)
}

/// Convert a row selected with [`MOVIE_COLUMNS`] into a Movie
pub(crate) fn row_to_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
    let release_date: Option<String> = row.get(2)?;
    let release_date = release_date
        .map(|s| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))
        })
        .transpose()?;

    Ok(Movie {
        movie_id: row.get(0)?,
        title: row.get(1)?,
        release_date,
        synopsis: row.get(3)?,
        rating: row.get(4)?,
        run_time: row.get(5)?,
        category: row.get(6)?,
    })
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}
